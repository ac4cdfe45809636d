//! Error types for move application and match flow.

use derive_more::{Display, Error};

/// Everything that can go wrong when driving a match.
///
/// Occupied-cell placement that bypasses validation is not represented
/// here: [`crate::Board::place`] treats it as a caller bug and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A cell index outside the board.
    #[display("cell index {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
    /// A move aimed at an occupied cell.
    #[display("cell {index} is already occupied")]
    InvalidMove {
        /// The rejected index.
        index: usize,
    },
    /// A move arrived while the round was waiting on
    /// [`crate::Contest::begin_next_round`].
    #[display("the round is over; begin the next round first")]
    RoundClosed,
    /// A round transition was requested while a round is still being
    /// played.
    #[display("a round is still in progress")]
    RoundInProgress,
    /// A move or round transition arrived after the match was decided.
    #[display("the match is already decided")]
    MatchFinished,
}
