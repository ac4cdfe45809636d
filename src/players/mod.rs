//! Move sources: where the state machine gets its moves from.

mod ai;
mod human;

pub use ai::AiMoveSource;
pub use human::HumanMoveSource;

use crate::board::Board;
use anyhow::Result;

/// A participant able to propose one move for the current board.
///
/// The match loop holds exactly one outstanding `propose_move` at a
/// time and trusts the returned index to come from
/// [`Board::available_moves`].
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Returns the index of the cell to play next.
    async fn propose_move(&mut self, board: &Board) -> Result<usize>;

    /// Display name for this player.
    fn name(&self) -> &str;

    /// Whether moves are computed rather than typed in. Drives the
    /// "thinking" notification in the front-end.
    fn is_automated(&self) -> bool {
        false
    }
}
