//! The tick-driven state machine at the heart of the game.
//!
//! Each call to [`Engine::step`] runs, in order:
//!
//! 1. spawn a piece from the bag if none is falling (game over if it collides),
//! 2. apply the pending lateral intent,
//! 3. apply gravity, counting resting ticks towards the lock delay,
//! 4. remove every completed row.
//!
//! Input arrives between ticks through [`Engine::set_direction`] and
//! [`Engine::rotate_piece`]. Presentation reads owned copies through
//! [`Engine::well`], [`Engine::active_piece`] and [`Engine::snapshot`].
//!
//! ```
//! use blocky_engine::{Engine, Phase};
//! use blocky_engine::types::Direction;
//!
//! let mut engine = Engine::with_seed(42);
//! engine.set_direction(Direction::Left);
//! let phase = engine.step().unwrap();
//!
//! assert_eq!(phase, Phase::Falling);
//! assert!(engine.active_piece().is_some());
//! ```

mod error;
mod game;

pub use blocky_core as core;
pub use blocky_types as types;

pub use error::EngineError;
pub use game::{Engine, Phase};
