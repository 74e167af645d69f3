//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules the engine is built from. It has no notion of
//! ticks or input; it only answers questions about the well and the pieces.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 well with collision testing, locking and row removal
//! - [`pieces`]: Tetromino rotation layouts
//! - [`piece`]: The falling piece (kind, position, rotation)
//! - [`rng`]: Injectable random source and the 7-bag randomizer
//! - [`snapshot`]: Owned, serialisable view for renderers
//!
//! # Example
//!
//! ```
//! use blocky_core::{Board, Piece};
//! use blocky_core::types::{PieceKind, Position};
//!
//! let mut board = Board::new();
//! let piece = Piece::new(PieceKind::I, Position::new(18, 0));
//!
//! assert!(!board.collides_piece(&piece));
//! board.add_to_well(&piece).unwrap();
//! assert!(board.is_occupied(19, 3));
//! assert!(board.completed_rows().is_empty());
//! ```

pub mod board;
pub mod error;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blocky_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowSet, Well};
pub use error::CoreError;
pub use piece::Piece;
pub use pieces::{get_layout, layout_count, Layout, Offset};
pub use rng::{PieceBag, RandomSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, WellSnapshot};
