//! Human move source fed by an external input channel.

use super::MoveSource;
use crate::board::Board;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Human player. Cell indices arrive on an unbounded channel filled by
/// the front-end's input task; indices for occupied cells are dropped
/// and the wait continues, so the core only ever sees valid moves.
///
/// Two human players may share one receiver (human-vs-human on a
/// single terminal): only one move request is outstanding at a time.
pub struct HumanMoveSource {
    name: String,
    input_rx: Arc<Mutex<mpsc::UnboundedReceiver<usize>>>,
}

impl HumanMoveSource {
    /// Creates a human player reading from the shared input channel.
    pub fn new(name: impl Into<String>, input_rx: Arc<Mutex<mpsc::UnboundedReceiver<usize>>>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl MoveSource for HumanMoveSource {
    async fn propose_move(&mut self, board: &Board) -> Result<usize> {
        let mut rx = self.input_rx.lock().await;
        while let Some(index) = rx.recv().await {
            if board.available_moves().contains(&index) {
                return Ok(index);
            }
        }
        anyhow::bail!("input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
