//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is empty or filled with a color.
//! Uses a flat vector, row-major, sized once at construction.
//! Coordinates: (x, y) where x grows left to right, y grows top to bottom.
//! Cells above the top edge (y < 0) are treated as open space for collision.

use crate::piece::Piece;
use crate::types::Cell;

/// The game board - flat storage, dimensions fixed for its lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.cols
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let start = y * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Whether `piece` shifted by (dx, dy) would leave the board sideways,
    /// drop through the floor, or overlap a filled cell.
    ///
    /// Cells above the top edge only collide with the side walls.
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.cells_at(dx, dy).iter().any(|&(x, y)| {
            if x < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Cells above the top edge are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.color));
        }
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Rows above each removed row move down, and empty rows fill the top.
    /// Uses a two-pointer pass, scanning bottom to top.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let height = self.rows as usize;
        let mut cleared = 0;
        let mut write_y = height;

        for read_y in (0..height).rev() {
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

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
