use std::fmt;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const BOARD_SIDE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveError {
    OutOfRange(usize),
    CellOccupied(usize),
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::OutOfRange(index) => {
                write!(f, "Cell index {} is out of range", index)
            }
            IllegalMoveError::CellOccupied(index) => {
                write!(f, "Cell {} is already marked", index)
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// 3x3 board stored row-major: row = index / 3, column = index % 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMoveError> {
        debug_assert!(mark != Mark::Empty, "cannot place an empty mark");
        if index >= CELL_COUNT {
            return Err(IllegalMoveError::OutOfRange(index));
        }
        if self.cells[index] != Mark::Empty {
            return Err(IllegalMoveError::CellOccupied(index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIDE, index % BOARD_SIDE)
}
