use thiserror::Error;

use crate::types::PieceKind;

/// Errors raised by the well itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A lock was attempted where the piece overlaps settled cells or leaves
    /// the grid. The engine only locks pieces it has already collision-checked,
    /// so seeing this means its state is corrupt.
    #[error("cannot lock {kind:?} piece: cell ({row}, {col}) is outside the well or already occupied")]
    LockBlocked { kind: PieceKind, row: i8, col: i8 },
}
