//! Board module - manages the well
//!
//! The well is a 10x20 grid where each cell is either settled or empty.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right).

use arrayvec::ArrayVec;

use crate::error::CoreError;
use crate::piece::Piece;
use crate::pieces::Offset;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Read-only copy of the settled cells, indexed `[row][col]`.
pub type Well = [[bool; WIDTH]; HEIGHT];

/// Row indices returned by [`Board::completed_rows`], bottom to top.
pub type RowSet = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, occupied: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    #[inline]
    pub fn is_valid(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(false))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// True if any offset of `layout`, translated by `at`, leaves the grid or
    /// lands on a settled cell. Sums beyond the `i8` range count as outside.
    pub fn collides(&self, layout: &[Offset], at: Position) -> bool {
        layout.iter().any(|&(dr, dc)| {
            let row = i16::from(at.row) + i16::from(dr);
            let col = i16::from(at.col) + i16::from(dc);
            match (i8::try_from(row), i8::try_from(col)) {
                (Ok(row), Ok(col)) => !self.is_valid(row, col),
                _ => true,
            }
        })
    }

    /// [`Board::collides`] for a piece's current layout and position.
    pub fn collides_piece(&self, piece: &Piece) -> bool {
        self.collides(&piece.layout(), piece.position())
    }

    /// Merge a piece's cells into the well.
    ///
    /// Nothing is written unless every cell is in bounds and empty.
    pub fn add_to_well(&mut self, piece: &Piece) -> Result<(), CoreError> {
        let cells = piece.cells();
        if let Some(bad) = cells.iter().find(|p| !self.is_valid(p.row, p.col)) {
            return Err(CoreError::LockBlocked {
                kind: piece.kind(),
                row: bad.row,
                col: bad.col,
            });
        }

        for p in cells {
            self.set(p.row, p.col, true);
        }
        Ok(())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&c| c)
    }

    /// Indices of all fully occupied rows, sorted bottom to top.
    pub fn completed_rows(&self) -> RowSet {
        (0..HEIGHT).rev().filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove the given rows; every surviving row drops by the number of
    /// removed rows beneath it. Out-of-range and duplicate indices are ignored.
    ///
    /// Returns the number of rows actually removed.
    pub fn delete_rows(&mut self, rows: &[usize]) -> usize {
        let mut remove = [false; HEIGHT];
        for &row in rows {
            if row < HEIGHT {
                remove[row] = true;
            }
        }

        // Two-pointer compaction from the floor upwards.
        let mut write_row = HEIGHT;
        for read_row in (0..HEIGHT).rev() {
            if remove[read_row] {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        // Rows left above the write pointer are freshly empty.
        self.cells[..write_row * WIDTH].fill(false);

        write_row
    }

    /// Copy out the grid for presentation.
    pub fn well(&self) -> Well {
        let mut out = [[false; WIDTH]; HEIGHT];
        for (row, chunk) in self.cells.chunks_exact(WIDTH).enumerate() {
            out[row].copy_from_slice(chunk);
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows (`#` settled, anything else empty),
    /// aligned to the floor. Handy for tests and puzzle setups.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(HEIGHT).enumerate() {
            for (col, ch) in line.chars().take(WIDTH).enumerate() {
                board.cells[(offset + i) * WIDTH + col] = ch == '#';
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
