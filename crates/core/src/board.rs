//! Board module - manages the grid of settled cells
//!
//! The board is `width` x `height` cells, fixed at construction. Cells are
//! stored in a flat row-major vector, row 0 at the top. A cell is either empty
//! or holds the palette index of the piece that settled there.

use crate::pieces::BoardPos;
use crate::types::{Cell, ColorIndex};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must be at least 1x1");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Whether `(x, y)` lies outside the grid
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height
    }

    /// Cell at `(x, y)`
    ///
    /// Panics when the position is outside the board.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "cell ({}, {}) outside {}x{} board",
                x, y, self.width, self.height
            ),
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if self.cells[idx].is_some())
    }

    /// In bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if self.cells[idx].is_none())
    }

    /// Mark each of `cells` with `color`
    ///
    /// Every target must be in bounds and empty, and `color` must be a piece
    /// color; anything else is a caller bug and panics before the board is
    /// touched.
    pub fn settle(&mut self, cells: &[BoardPos], color: ColorIndex) {
        assert!(color.is_piece_color(), "{:?} is not a piece color", color);
        for &(x, y) in cells {
            assert!(
                self.is_free(x, y),
                "cannot settle on ({}, {}): out of bounds or occupied",
                x,
                y
            );
        }
        for &(x, y) in cells {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Bottommost full row, if any
    pub fn lowest_full_row(&self) -> Option<usize> {
        (0..self.height).rev().find(|&y| self.is_row_full(y))
    }

    /// Remove row `y`, shift every row above it down by one and open an empty
    /// row at the top.
    pub fn remove_row(&mut self, y: usize) {
        assert!(y < self.height, "row {} outside board", y);
        let width = self.width;
        // Rows 0..y move to 1..=y in one overlapping copy.
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Clear full rows one at a time, always taking the lowest one and
    /// rescanning from the bottom after each removal.
    ///
    /// Returns the number of rows removed. Row 0 is eligible like any other.
    pub fn clear_full_rows_from_bottom(&mut self) -> usize {
        let mut cleared = 0;
        while let Some(y) = self.lowest_full_row() {
            self.remove_row(y);
            cleared += 1;
        }
        cleared
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
