//! Automated move source backed by the minimax engine.

use super::MoveSource;
use crate::board::{Board, Side};
use crate::search::Minimax;
use anyhow::Result;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Cosmetic name pool for automated players.
const NAMES: [&str; 14] = [
    "Leanne", "Ervin", "Clementine", "Patricia", "Chelsey", "Dennis", "Kurtis", "Nicholas",
    "Alphonse", "Marie", "Edouard", "Lucille", "Julie", "Bernard",
];

/// Automated player: sleeps a short random "thinking" delay, then asks
/// the search engine for a move.
pub struct AiMoveSource {
    name: String,
    side: Side,
    engine: Minimax,
}

impl AiMoveSource {
    /// Creates an AI player for `side` searching to `depth` plies,
    /// named from the pool with an "(AI)" suffix.
    pub fn new(side: Side, depth: u32) -> Self {
        let mut rng = rand::rng();
        let name = format!("{}(AI)", NAMES[rng.random_range(0..NAMES.len())]);
        Self {
            name,
            side,
            engine: Minimax::new(depth),
        }
    }
}

#[async_trait::async_trait]
impl MoveSource for AiMoveSource {
    async fn propose_move(&mut self, board: &Board) -> Result<usize> {
        // Simulated thinking time so moves do not land instantly.
        let delay = rand::rng().random_range(500..1500);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        let index = self
            .engine
            .find_best_move(board, self.side)
            .ok_or_else(|| anyhow::anyhow!("no available moves"))?;
        debug!(player = %self.name, index, "Search selected move");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}
