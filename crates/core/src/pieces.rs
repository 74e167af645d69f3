//! Pieces module - tetromino layout tables
//!
//! Every kind owns one or more rotation layouts. A layout is the set of
//! `(d_row, d_col)` offsets the piece occupies relative to its origin, inside
//! a 4x4 box. Rotation indices wrap modulo the number of distinct layouts,
//! so `O` has a single entry and the rest have four.

use crate::types::PieceKind;

/// Offset of a single mino relative to piece origin, as `(d_row, d_col)`.
pub type Offset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type Layout = [Offset; 4];

const I_LAYOUTS: [Layout; 4] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 1), (1, 1), (2, 1), (3, 1)],
];

const O_LAYOUTS: [Layout; 1] = [[(0, 1), (0, 2), (1, 1), (1, 2)]];

const T_LAYOUTS: [Layout; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

const S_LAYOUTS: [Layout; 4] = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 1), (1, 2), (2, 0), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const Z_LAYOUTS: [Layout; 4] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 2), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const J_LAYOUTS: [Layout; 4] = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
];

const L_LAYOUTS: [Layout; 4] = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

/// All distinct rotation layouts for a kind, clockwise from spawn orientation.
pub fn layouts(kind: PieceKind) -> &'static [Layout] {
    match kind {
        PieceKind::I => &I_LAYOUTS,
        PieceKind::O => &O_LAYOUTS,
        PieceKind::T => &T_LAYOUTS,
        PieceKind::S => &S_LAYOUTS,
        PieceKind::Z => &Z_LAYOUTS,
        PieceKind::J => &J_LAYOUTS,
        PieceKind::L => &L_LAYOUTS,
    }
}

/// Number of distinct rotation states for a kind.
pub fn layout_count(kind: PieceKind) -> usize {
    layouts(kind).len()
}

/// Layout for a kind at the given rotation index (wrapped).
pub fn get_layout(kind: PieceKind, rotation: usize) -> Layout {
    let table = layouts(kind);
    table[rotation % table.len()]
}
