//! Core board types: sides, cells, and the 3x3 grid.

use serde::{Deserialize, Serialize};

/// One of the two marks on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The cross mark.
    X,
    /// The circle mark.
    O,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell taken by a side.
    Taken(Side),
}

/// 3x3 board, cells indexed 0-8 in row-major order.
///
/// A cell never moves directly from one side to the other; it has to
/// pass through [`Board::clear_cell`], which happens only between
/// rounds and inside search backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index, or `None` out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Indices of all empty cells, in ascending order.
    ///
    /// Used both for search expansion and for validating human input.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks whether at least one empty cell remains.
    pub fn has_available_move(&self) -> bool {
        self.cells.iter().any(|&cell| cell == Cell::Empty)
    }

    /// Places `side`'s mark at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied or the index is out of bounds.
    /// Callers are expected to validate against [`Board::available_moves`]
    /// first; violating the precondition is a caller bug.
    pub fn place(&mut self, index: usize, side: Side) {
        assert!(
            self.is_empty(index),
            "cell {index} is not empty; moves must come from available_moves"
        );
        self.cells[index] = Cell::Taken(side);
    }

    /// Empties the cell at `index`. Used for search backtracking.
    pub fn clear_cell(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Empties every cell. Used between rounds.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// 9-bit occupancy mask for `side`: bit `i` is set iff cell `i`
    /// holds that side's mark.
    pub fn occupancy(&self, side: Side) -> u16 {
        self.cells
            .iter()
            .enumerate()
            .fold(0, |mask, (index, &cell)| {
                if cell == Cell::Taken(side) {
                    mask | (1 << index)
                } else {
                    mask
                }
            })
    }

    /// Formats the board for a terminal, empty cells shown as 1-9.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => out.push_str(&(index + 1).to_string()),
                    Cell::Taken(Side::X) => out.push('X'),
                    Cell::Taken(Side::O) => out.push('O'),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
