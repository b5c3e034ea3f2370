//! Board module - manages the game grid
//!
//! The board is a 12x20 grid of cell values (0 = empty, 1..=7 = settled piece id).
//! Uses a flat, fixed-size array: no allocation, and row removal is an explicit
//! shift-down loop over row-major storage.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;
use log::debug;

use crate::pieces::ActivePiece;
use crate::types::{Cell, PieceKind, COLUMNS, EMPTY, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = COLUMNS * ROWS;

/// Result of one line-clear pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Rows removed, as indices in the grid before the pass, bottom to top.
    /// A merge completes at most four, but a scripted board can hold more.
    pub rows: ArrayVec<usize, ROWS>,
    /// Number of rows removed
    pub count: usize,
}

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Create a board from a full grid of rows
    pub fn from_rows(rows: &[[Cell; COLUMNS]; ROWS]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            debug_assert!(
                row.iter().all(|&v| v == EMPTY || PieceKind::from_id(v).is_some()),
                "invalid cell value in row {}",
                y
            );
            board.row_mut(y).copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as usize >= COLUMNS || y < 0 || y as usize >= ROWS {
            return None;
        }
        Some((y as usize) * COLUMNS + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        COLUMNS
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLUMNS;
        &self.cells[start..start + COLUMNS]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * COLUMNS;
        &mut self.cells[start..start + COLUMNS]
    }

    /// Write every filled cell of `piece` into the grid.
    ///
    /// Empty cells of the shape never overwrite the board. The caller must
    /// only merge a collision-free piece.
    pub fn merge(&mut self, piece: &ActivePiece) {
        debug_assert!(
            !crate::collision::collides(self, piece),
            "merge at colliding position {:?}",
            (piece.x, piece.y)
        );

        for (x, y, value) in piece.cells() {
            let idx = Self::index(x, y);
            debug_assert!(idx.is_some(), "merge out of grid at ({}, {})", x, y);
            if let Some(idx) = idx {
                self.cells[idx] = value;
            }
        }
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row
    fn remove_row(&mut self, y: usize) {
        for row in (1..=y).rev() {
            let src_start = (row - 1) * COLUMNS;
            self.cells
                .copy_within(src_start..src_start + COLUMNS, row * COLUMNS);
        }
        self.row_mut(0).fill(EMPTY);
    }

    /// Clear every complete row.
    ///
    /// Scans bottom to top. A complete row is removed, an empty row enters at
    /// the top, and the same index is examined again since the row above has
    /// moved into it.
    pub fn clear_completed_rows(&mut self) -> LineClear {
        let mut result = LineClear::default();
        let mut y = ROWS;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                // Rows above `row` have shifted down once per clear so far.
                // Every row is visited once, so this never exceeds ROWS.
                result.rows.push(row - result.count);
                result.count += 1;
            } else {
                y -= 1;
            }
        }

        if result.count > 0 {
            debug!("cleared {} row(s): {:?}", result.count, result.rows);
        }
        result
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_u8_grid(&self, out: &mut [[Cell; COLUMNS]; ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Set a single cell (test fixtures)
    #[cfg(test)]
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
