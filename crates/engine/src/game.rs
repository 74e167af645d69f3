//! Engine state and the per-tick update.

use log::{debug, info, warn};

use blocky_core::{
    ActiveSnapshot, Board, Piece, PieceBag, RandomSource, SimpleRng, Well, WellSnapshot,
};
use blocky_types::{Direction, PieceKind, LOCK_DELAY_TICKS, SPAWN_POSITION};

use crate::error::EngineError;

/// Where the engine stands between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No piece is falling; the next tick spawns one.
    NoActivePiece,
    /// The active piece fell on the last gravity pass.
    Falling,
    /// The active piece is blocked below; the value is the lock-delay counter.
    Resting(u32),
    /// A spawn collided with the stack. Terminal.
    GameOver,
}

/// Authoritative game state: the well, the falling piece and the spawn bag.
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    direction: Direction,
    lock_counter: u32,
    bag: PieceBag<R>,
    game_over: bool,
    /// Pieces spawned since construction or the last restart.
    spawned: u32,
}

impl Engine<SimpleRng> {
    /// Engine on an empty well, shuffling with the built-in LCG.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// Engine on an empty well drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self::from_board(Board::new(), rng)
    }

    /// Engine starting from a prepared well.
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            board,
            active: None,
            direction: Direction::None,
            lock_counter: 0,
            bag: PieceBag::new(rng),
            game_over: false,
            spawned: 0,
        }
    }

    /// Advance one tick.
    ///
    /// Returns the phase after the tick. Once [`Phase::GameOver`] is reached
    /// further calls change nothing. `Err` means the engine found its own
    /// state inconsistent and should not be stepped again.
    pub fn step(&mut self) -> Result<Phase, EngineError> {
        if self.game_over {
            return Ok(Phase::GameOver);
        }

        let Some(mut piece) = self.active.take().or_else(|| self.spawn()) else {
            return Ok(Phase::GameOver);
        };

        self.apply_movement(&mut piece);

        if self.apply_gravity(&mut piece)? {
            self.active = Some(piece);
        }

        self.clear_completed_rows();

        Ok(self.phase())
    }

    /// Draw the next kind and place it at the spawn point.
    ///
    /// A spawn that collides ends the game and yields `None`.
    fn spawn(&mut self) -> Option<Piece> {
        let kind = self.bag.draw();
        let piece = Piece::new(kind, SPAWN_POSITION);

        if self.board.collides_piece(&piece) {
            self.game_over = true;
            info!(
                "game over: {:?} blocked at spawn after {} pieces",
                kind, self.spawned
            );
            return None;
        }

        self.spawned += 1;
        self.lock_counter = 0;
        debug!("spawned {:?} at {:?}", kind, piece.position());
        Some(piece)
    }

    /// Shift by the pending intent; blocked moves are dropped silently.
    fn apply_movement(&self, piece: &mut Piece) {
        let next = piece.position().add(0, self.direction.col_delta());
        if !self.board.collides(&piece.layout(), next) {
            piece.move_to(next);
        }
    }

    /// Fall one row, or count a resting tick and lock once the delay runs out.
    ///
    /// Returns whether the piece is still active.
    fn apply_gravity(&mut self, piece: &mut Piece) -> Result<bool, EngineError> {
        let below = piece.position().add(1, 0);
        if !self.board.collides(&piece.layout(), below) {
            piece.move_to(below);
            self.lock_counter = 0;
            return Ok(true);
        }

        self.lock_counter += 1;
        if self.lock_counter < LOCK_DELAY_TICKS {
            return Ok(true);
        }

        self.board.add_to_well(piece)?;
        self.lock_counter = 0;
        debug!("locked {:?} at {:?}", piece.kind(), piece.position());
        Ok(false)
    }

    fn clear_completed_rows(&mut self) {
        let rows = self.board.completed_rows();
        if rows.is_empty() {
            return;
        }
        let removed = self.board.delete_rows(&rows);
        debug!("cleared {} rows: {:?}", removed, rows.as_slice());
    }

    /// Set the intent applied on every following tick until changed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Set the intent from its textual name (`none`, `left`, `right`).
    pub fn set_direction_by_name(&mut self, name: &str) -> Result<(), EngineError> {
        let direction = Direction::from_str(name)
            .ok_or_else(|| EngineError::UnrecognizedDirection(name.to_string()))?;
        self.set_direction(direction);
        Ok(())
    }

    /// Rotate the active piece in place.
    ///
    /// Rotations that would overlap the stack or leave the well are rejected.
    /// Returns whether the rotation was applied. The lock-delay counter is not
    /// touched.
    pub fn rotate_piece(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.active.as_mut() else {
            warn!("rotate requested with no active piece");
            return false;
        };

        let rotated = piece.rotated(clockwise);
        if self.board.collides_piece(&rotated) {
            return false;
        }
        *piece = rotated;
        true
    }

    /// Clear the well and start over, keeping the random source.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.direction = Direction::None;
        self.lock_counter = 0;
        self.game_over = false;
        self.spawned = 0;
        self.bag.reset();
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            return Phase::GameOver;
        }
        match self.active {
            None => Phase::NoActivePiece,
            Some(_) if self.lock_counter > 0 => Phase::Resting(self.lock_counter),
            Some(_) => Phase::Falling,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Copy of the settled cells.
    pub fn well(&self) -> Well {
        self.board.well()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the falling piece, if any.
    pub fn active_piece(&self) -> Option<Piece> {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn lock_counter(&self) -> u32 {
        self.lock_counter
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.spawned
    }
}

impl<R: RandomSource + Clone> Engine<R> {
    /// Kind the next spawn will produce.
    pub fn next_kind(&self) -> PieceKind {
        self.bag.peek()
    }

    pub fn snapshot(&self) -> WellSnapshot {
        WellSnapshot {
            well: self.well(),
            active: self.active.map(ActiveSnapshot::from),
            next: (!self.game_over).then(|| self.next_kind()),
            lock_counter: self.lock_counter,
            game_over: self.game_over,
        }
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
