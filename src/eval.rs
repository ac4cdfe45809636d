//! Heuristic position scoring for the search engine.
//!
//! Each of the eight lines is scored independently and the results are
//! summed, with no normalization. Per line the magnitude follows a
//! 0 -> 1 -> 10 -> 100 ladder: every additional same-side cell
//! multiplies the running score by ten once that side already
//! contributes, and a line holding both sides is worth exactly 0 since
//! it can never become a win. The ladder is what lets a depth-1 search
//! tell "two in a line" apart from "one in a line".

use crate::board::{Board, Cell, Side};

/// The 8 lines as index triples: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Scores the whole board from `maximizing`'s perspective.
pub fn evaluate(board: &Board, maximizing: Side) -> i32 {
    LINES
        .iter()
        .map(|&line| evaluate_line(board, maximizing, line))
        .sum()
}

/// Scores one line from `maximizing`'s perspective, processing its
/// three cells in fixed order.
///
/// A lone third cell on a neutral line is treated like a first cell
/// and scores plus or minus one.
pub fn evaluate_line(board: &Board, maximizing: Side, [a, b, c]: [usize; 3]) -> i32 {
    // Some(true) = maximizer's cell, Some(false) = minimizer's.
    let mark = |index: usize| match board.get(index) {
        Some(Cell::Taken(side)) => Some(side == maximizing),
        _ => None,
    };

    let mut score = 0;

    match mark(a) {
        Some(true) => score = 1,
        Some(false) => score = -1,
        None => {}
    }

    match mark(b) {
        Some(true) => {
            if score == 1 {
                score = 10;
            } else if score == -1 {
                return 0;
            } else {
                score = 1;
            }
        }
        Some(false) => {
            if score == -1 {
                score = -10;
            } else if score == 1 {
                return 0;
            } else {
                score = -1;
            }
        }
        None => {}
    }

    match mark(c) {
        Some(true) => {
            if score > 0 {
                score *= 10;
            } else if score < 0 {
                return 0;
            } else {
                score = 1;
            }
        }
        Some(false) => {
            if score < 0 {
                score *= 10;
            } else if score > 0 {
                return 0;
            } else {
                score = -1;
            }
        }
        None => {}
    }

    score
}
