//! Tests for board storage and query helpers.

use dicey_tictactoe::{Board, Cell, Side};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.has_available_move());
    assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    assert_eq!(board.occupancy(Side::X), 0);
    assert_eq!(board.occupancy(Side::O), 0);
}

#[test]
fn test_place_marks_cell() {
    let mut board = Board::new();
    board.place(4, Side::X);
    assert_eq!(board.get(4), Some(Cell::Taken(Side::X)));
    assert!(!board.is_empty(4));
    assert_eq!(board.occupancy(Side::X), 1 << 4);
}

#[test]
fn test_available_and_occupied_partition_the_board() {
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(4, Side::O);
    board.place(8, Side::X);

    let available = board.available_moves();
    assert_eq!(available, vec![1, 2, 3, 5, 6, 7]);
    for index in 0..Board::SIZE {
        // Every index is exactly one of available or occupied.
        assert_eq!(available.contains(&index), board.is_empty(index));
    }
}

#[test]
#[should_panic(expected = "not empty")]
fn test_place_on_occupied_cell_panics() {
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(0, Side::O);
}

#[test]
fn test_clear_cell_restores_empty() {
    let mut board = Board::new();
    board.place(3, Side::O);
    board.clear_cell(3);
    assert!(board.is_empty(3));
    assert_eq!(board, Board::new());
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(1, Side::O);
    board.place(2, Side::X);
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_full_board_has_no_available_move() {
    let mut board = Board::new();
    for index in 0..Board::SIZE {
        let side = if index % 2 == 0 { Side::X } else { Side::O };
        board.place(index, side);
    }
    assert!(!board.has_available_move());
    assert!(board.available_moves().is_empty());
}

#[test]
fn test_render_shows_marks_and_cell_numbers() {
    let mut board = Board::new();
    board.place(0, Side::X);
    board.place(4, Side::O);
    let rendered = board.render();
    assert!(rendered.starts_with("X|2|3"));
    assert!(rendered.contains("4|O|6"));
}
