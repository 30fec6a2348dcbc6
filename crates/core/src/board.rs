//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of cell values stored in a flat,
//! row-major `Vec<u8>` (`y * width + x`). Row 0 is the top of the playfield.
//! The grid never changes size after creation: merge and line clear work in
//! place.

use crate::piece::Shape;
use crate::types::{CellValue, Position, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellValue>,
}

impl Board {
    /// Create an empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellValue> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|&v| v != EMPTY))
            .unwrap_or(false)
    }

    /// Borrow row `y`, or None if out of range
    pub fn row(&self, y: usize) -> Option<&[CellValue]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Whether `shape` placed at `pos` overlaps occupied cells or leaves the
    /// board through a side or the floor.
    ///
    /// Cells above the top edge (negative row) are allowed.
    pub fn collide(&self, shape: &Shape, pos: Position) -> bool {
        shape.occupied().any(|(col, row, _)| {
            let x = pos.x + col as i32;
            let y = pos.y + row as i32;
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return true;
            }
            if y < 0 {
                return false;
            }
            self.cells[y as usize * self.width + x as usize] != EMPTY
        })
    }

    /// Write the piece cells into the board, then clear full rows.
    ///
    /// The caller must have checked [`Board::collide`] first. Cells above
    /// the top edge have nowhere to go and are dropped.
    ///
    /// Returns the number of rows cleared.
    pub fn merge(&mut self, shape: &Shape, pos: Position) -> usize {
        for (col, row, value) in shape.occupied() {
            self.set(pos.x + col as i32, pos.y + row as i32, value);
        }
        self.clear_lines()
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Two-pointer compaction: rows are read bottom to top and every
    /// non-full row is copied down to the write cursor, so each full row is
    /// skipped exactly once regardless of how full and partial rows
    /// interleave. The rows left above the cursor are emptied.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut cleared = 0;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == EMPTY)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
