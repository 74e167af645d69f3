//! The falling piece.

use crate::pieces::{get_layout, layout_count, Layout};
use crate::types::{PieceKind, Position};

/// Active falling piece
///
/// `rotate` never checks the board. Callers that need a legal state should
/// test [`Piece::rotated`] against the board first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    position: Position,
    rotation: usize,
}

impl Piece {
    /// Create a piece in its spawn orientation at `position`.
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            position,
            rotation: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Occupied offsets for the current rotation.
    pub fn layout(&self) -> Layout {
        get_layout(self.kind, self.rotation)
    }

    /// Absolute cells covered by the piece.
    pub fn cells(&self) -> [Position; 4] {
        self.layout().map(|(dr, dc)| self.position.add(dr, dc))
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Advance the rotation state in place; position is untouched.
    pub fn rotate(&mut self, clockwise: bool) {
        let n = layout_count(self.kind);
        self.rotation = if clockwise {
            (self.rotation + 1) % n
        } else {
            (self.rotation + n - 1) % n
        };
    }

    /// Copy of this piece rotated once.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let mut next = *self;
        next.rotate(clockwise);
        next
    }
}
