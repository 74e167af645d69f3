//! Core types module - shared value types and constants
//!
//! This crate defines the plain values every other layer agrees on: grid
//! coordinates, the player's movement intent, the tetromino catalogue and the
//! fixed well dimensions. Nothing here holds game state.
//!
//! # Coordinates
//!
//! Positions are `(row, col)`. Row 0 is the top of the well and rows grow
//! towards the floor, so gravity always adds `+1` to the row.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns in the well |
//! | `BOARD_HEIGHT` | 20 | Rows in the well |
//! | `LOCK_DELAY_TICKS` | 30 | Resting ticks before a piece locks |
//! | `SPAWN_POSITION` | (3, 3) | Origin of every freshly spawned piece |
//!
//! # Examples
//!
//! ```
//! use blocky_types::{Direction, PieceKind, Position, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let p = Position::new(3, 4).add(1, -1);
//! assert_eq!(p, Position::new(4, 3));
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Consecutive resting ticks after which a grounded piece is locked.
pub const LOCK_DELAY_TICKS: u32 = 30;

/// Where new pieces appear: near the top, horizontally centred for a 4-wide box.
pub const SPAWN_POSITION: Position = Position::new(3, BOARD_WIDTH as i8 / 2 - 2);

/// A `(row, col)` coordinate on the well.
///
/// Validity against the grid is the board's concern; any `i8` pair is a
/// legal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Translate by `(d_row, d_col)`, returning a new position.
    #[inline]
    pub const fn add(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Lateral movement intent applied once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    /// Parse an intent from string (case-insensitive)
    ///
    /// ```
    /// use blocky_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Direction::None),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Column delta for this intent.
    pub fn col_delta(&self) -> i8 {
        match self {
            Direction::None => 0,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalogue order. A fresh bag starts from this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocky_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_position_is_centred() {
        assert_eq!(SPAWN_POSITION, Position::new(3, 3));
        assert_eq!(LOCK_DELAY_TICKS, 30);
    }

    #[test]
    fn position_add_does_not_mutate() {
        let p = Position::new(5, 5);
        let q = p.add(-1, 2);
        assert_eq!(p, Position::new(5, 5));
        assert_eq!(q, Position::new(4, 7));
    }

    #[test]
    fn direction_round_trips_through_str() {
        for d in [Direction::None, Direction::Left, Direction::Right] {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Direction::default(), Direction::None);
    }

    #[test]
    fn direction_col_delta() {
        assert_eq!(Direction::None.col_delta(), 0);
        assert_eq!(Direction::Left.col_delta(), -1);
        assert_eq!(Direction::Right.col_delta(), 1);
    }

    #[test]
    fn piece_kind_catalogue_is_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
            assert_eq!(PieceKind::from_str(a.as_str()), Some(*a));
        }
    }
}
