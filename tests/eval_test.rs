//! Tests for the static evaluator.

use dicey_tictactoe::{Board, Cell, LINES, Side, evaluate, evaluate_line};

const LINE: [usize; 3] = [0, 1, 2];

fn board_with(cells: [Cell; 3]) -> Board {
    let mut board = Board::new();
    for (index, cell) in cells.into_iter().enumerate() {
        if let Cell::Taken(side) = cell {
            board.place(index, side);
        }
    }
    board
}

#[test]
fn test_empty_board_scores_zero() {
    let board = Board::new();
    assert_eq!(evaluate(&board, Side::X), 0);
    assert_eq!(evaluate(&board, Side::O), 0);
}

#[test]
fn test_amplification_ladder() {
    let x = Cell::Taken(Side::X);
    let e = Cell::Empty;
    assert_eq!(evaluate_line(&board_with([x, e, e]), Side::X, LINE), 1);
    assert_eq!(evaluate_line(&board_with([x, x, e]), Side::X, LINE), 10);
    assert_eq!(evaluate_line(&board_with([x, x, x]), Side::X, LINE), 100);
}

#[test]
fn test_opponent_ladder_is_negative() {
    let o = Cell::Taken(Side::O);
    let e = Cell::Empty;
    assert_eq!(evaluate_line(&board_with([o, e, e]), Side::X, LINE), -1);
    assert_eq!(evaluate_line(&board_with([o, o, e]), Side::X, LINE), -10);
    assert_eq!(evaluate_line(&board_with([o, o, o]), Side::X, LINE), -100);
}

#[test]
fn test_mixed_line_scores_zero() {
    let x = Cell::Taken(Side::X);
    let o = Cell::Taken(Side::O);
    let e = Cell::Empty;
    for cells in [
        [x, o, e],
        [o, x, e],
        [x, e, o],
        [o, e, x],
        [e, x, o],
        [e, o, x],
        [x, x, o],
        [o, o, x],
        [x, o, x],
        [o, x, o],
    ] {
        assert_eq!(
            evaluate_line(&board_with(cells), Side::X, LINE),
            0,
            "blocked line {cells:?} must score 0"
        );
    }
}

#[test]
fn test_lone_third_cell_scores_like_a_first_cell() {
    let x = Cell::Taken(Side::X);
    let o = Cell::Taken(Side::O);
    let e = Cell::Empty;
    assert_eq!(evaluate_line(&board_with([e, e, x]), Side::X, LINE), 1);
    assert_eq!(evaluate_line(&board_with([e, e, o]), Side::X, LINE), -1);
}

#[test]
fn test_line_scoring_is_antisymmetric_in_maximizing_side() {
    // All 27 fills of a single line: scoring for X always negates
    // scoring for O.
    let options = [Cell::Empty, Cell::Taken(Side::X), Cell::Taken(Side::O)];
    for a in options {
        for b in options {
            for c in options {
                let board = board_with([a, b, c]);
                assert_eq!(
                    evaluate_line(&board, Side::X, LINE),
                    -evaluate_line(&board, Side::O, LINE),
                    "fill {:?} breaks antisymmetry",
                    [a, b, c]
                );
            }
        }
    }
}

#[test]
fn test_evaluate_sums_all_lines() {
    // A lone center mark sits on four lines: one row, one column, two
    // diagonals.
    let mut board = Board::new();
    board.place(4, Side::X);
    assert_eq!(evaluate(&board, Side::X), 4);
    assert_eq!(evaluate(&board, Side::O), -4);
}

#[test]
fn test_two_in_a_row_dominates_singles() {
    // X at 0 and 1: row 0 scores 10, columns 0 and 1 score 1 each.
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(1, Side::X);
    assert_eq!(evaluate(&board, Side::X), 12);
}

#[test]
fn test_line_table_has_eight_unique_lines() {
    assert_eq!(LINES.len(), 8);
    for (i, a) in LINES.iter().enumerate() {
        for b in LINES.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
