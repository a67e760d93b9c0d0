use crate::error::{BoardError, ConfigError};

use super::Piece;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Smallest grid edge on which a run of four can exist.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Yellow,
    Red,
}

/// Row-major grid of cells. Row 0 is the top; pieces fall toward the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {rows}x{cols}"
            )));
        }
        Ok(Self::empty(rows, cols))
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.at(row, col))
    }

    /// Unchecked read for callers that already iterate within bounds.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Scan a column from the bottom up for the first empty cell.
    /// `Ok(None)` means the column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Result<Option<usize>, BoardError> {
        if col >= self.cols {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        Ok((0..self.rows).rev().find(|&row| self.at(row, col) == Cell::Empty))
    }

    /// Write a piece into an empty cell found via [`Board::lowest_empty_row`].
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) {
        let idx = row * self.cols + col;
        debug_assert!(
            row < self.rows && col < self.cols,
            "placement ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        debug_assert_eq!(self.cells[idx], Cell::Empty, "cell ({row}, {col}) already occupied");
        self.cells[idx] = piece.to_cell();
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.at(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Rows from top to bottom, for display.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
