//! Serialisable view of the game for presentation layers.

use serde::Serialize;

use crate::board::Well;
use crate::piece::Piece;
use crate::types::{PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub position: Position,
    pub rotation: usize,
    pub cells: [Position; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            position: value.position(),
            rotation: value.rotation(),
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame. Owns copies only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellSnapshot {
    pub well: Well,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub lock_counter: u32,
    pub game_over: bool,
}

impl WellSnapshot {
    /// Plain text grid: `#` settled, `@` active piece, `.` empty.
    pub fn render_text(&self) -> String {
        let mut grid: Vec<Vec<char>> = self
            .well
            .iter()
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect();

        if let Some(active) = &self.active {
            for p in active.cells {
                let (Ok(r), Ok(c)) = (usize::try_from(p.row), usize::try_from(p.col)) else {
                    continue;
                };
                if let Some(cell) = grid.get_mut(r).and_then(|row| row.get_mut(c)) {
                    *cell = '@';
                }
            }
        }

        let mut out = String::with_capacity(grid.len() * (grid[0].len() + 1));
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn snapshot_with(board: &Board, active: Option<Piece>) -> WellSnapshot {
        WellSnapshot {
            well: board.well(),
            active: active.map(ActiveSnapshot::from),
            next: None,
            lock_counter: 0,
            game_over: false,
        }
    }

    #[test]
    fn render_text_marks_settled_and_active() {
        let board = Board::from_rows(&["#........#"]);
        let piece = Piece::new(PieceKind::O, Position::new(0, 0));
        let text = snapshot_with(&board, Some(piece)).render_text();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], ".@@.......");
        assert_eq!(lines[1], ".@@.......");
        assert_eq!(lines[19], "#........#");
    }

    #[test]
    fn serialises_to_json() {
        let board = Board::new();
        let piece = Piece::new(PieceKind::T, Position::new(3, 3));
        let json = serde_json::to_value(snapshot_with(&board, Some(piece))).unwrap();

        assert_eq!(json["active"]["kind"], "T");
        assert_eq!(json["active"]["position"]["row"], 3);
        assert_eq!(json["well"].as_array().unwrap().len(), 20);
        assert_eq!(json["game_over"], false);
    }
}
