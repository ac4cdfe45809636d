//! Tests for the minimax engine.

use dicey_tictactoe::{Board, FirstSelector, Minimax, Side};
use std::collections::HashSet;

/// X at 0 and 1, O at 4 and 8, X to move. Index 2 completes the top
/// row and is the uniquely best move at any depth >= 1.
fn forced_win_board() -> Board {
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(1, Side::X);
    board.place(4, Side::O);
    board.place(8, Side::O);
    board
}

#[test]
fn test_search_does_not_mutate_the_board() {
    let board = forced_win_board();
    let before = board.clone();
    let mut engine = Minimax::new(3);
    engine.find_best_move(&board, Side::X);
    assert_eq!(board, before);
}

#[test]
fn test_completes_winning_row_at_depth_one() {
    let board = forced_win_board();
    let mut engine = Minimax::new(1);
    for _ in 0..20 {
        assert_eq!(engine.find_best_move(&board, Side::X), Some(2));
    }
}

#[test]
fn test_completes_winning_row_at_depth_two() {
    let board = forced_win_board();
    let mut engine = Minimax::new(2);
    for _ in 0..20 {
        assert_eq!(engine.find_best_move(&board, Side::X), Some(2));
    }
}

#[test]
fn test_first_move_covers_multiple_cells() {
    // On an untouched board the engine picks uniformly among all nine
    // cells, so repeated trials must not always land on the same one.
    let board = Board::new();
    let mut engine = Minimax::new(1);
    let chosen: HashSet<usize> = (0..60)
        .map(|_| engine.find_best_move(&board, Side::O).unwrap())
        .collect();
    assert!(
        chosen.len() > 1,
        "opening move should not be deterministic, got {chosen:?}"
    );
}

#[test]
fn test_stub_selector_makes_search_reproducible() {
    let board = Board::new();
    let mut engine = Minimax::with_selector(1, FirstSelector);
    for _ in 0..5 {
        // Nine candidates: the stub always takes the first one.
        assert_eq!(engine.find_best_move(&board, Side::X), Some(0));
    }
}

#[test]
fn test_stub_selector_still_prefers_the_winning_move() {
    let board = forced_win_board();
    let mut engine = Minimax::with_selector(1, FirstSelector);
    assert_eq!(engine.find_best_move(&board, Side::X), Some(2));
}

#[test]
fn test_full_board_yields_no_move() {
    // Full board: the search degrades to leaf evaluation and reports
    // no position.
    let mut board = Board::new();
    for index in [0, 2, 3, 7, 8] {
        board.place(index, Side::X);
    }
    for index in [1, 4, 5, 6] {
        board.place(index, Side::O);
    }
    let before = board.clone();
    let mut engine = Minimax::new(2);
    assert_eq!(engine.find_best_move(&board, Side::X), None);
    assert_eq!(board, before);
}

#[test]
fn test_depth_zero_is_a_leaf() {
    // Depth 0 never expands moves, so there is nothing to choose.
    let board = forced_win_board();
    let mut engine = Minimax::new(0);
    assert_eq!(engine.find_best_move(&board, Side::X), None);
}

#[test]
fn test_blocks_opponent_two_in_a_row() {
    // O at 3 and 4 threatens the middle row; X has no win of its own,
    // so at depth 2 the search must block at 5.
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(3, Side::O);
    board.place(8, Side::X);
    board.place(4, Side::O);
    let mut engine = Minimax::new(2);
    for _ in 0..20 {
        assert_eq!(engine.find_best_move(&board, Side::X), Some(5));
    }
}
