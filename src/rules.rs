//! Win detection over the eight fixed line patterns.

use crate::board::{Board, Side};

/// The 8 winning lines as 9-bit occupancy masks (bit `i` = cell `i`):
/// three rows, three columns, two diagonals.
pub const WIN_PATTERNS: [u16; 8] = [
    0b000_000_111, // top row
    0b000_111_000, // middle row
    0b111_000_000, // bottom row
    0b001_001_001, // left column
    0b010_010_010, // middle column
    0b100_100_100, // right column
    0b100_010_001, // main diagonal
    0b001_010_100, // anti-diagonal
];

/// Checks whether `side` fully occupies some winning line.
pub fn has_won(board: &Board, side: Side) -> bool {
    let mask = board.occupancy(side);
    WIN_PATTERNS
        .iter()
        .any(|&pattern| mask & pattern == pattern)
}

/// The side holding a completed line, if any. X is checked first;
/// simultaneous wins are unreachable under alternating single-cell
/// moves and are not defended against.
pub fn round_winner(board: &Board) -> Option<Side> {
    if has_won(board, Side::X) {
        Some(Side::X)
    } else if has_won(board, Side::O) {
        Some(Side::O)
    } else {
        None
    }
}

/// Checks whether the round is finished: a completed line or a full
/// board.
pub fn is_over(board: &Board) -> bool {
    round_winner(board).is_some() || !board.has_available_move()
}
