use thiserror::Error;

use blocky_core::CoreError;

/// Faults surfaced by the engine.
///
/// Game over is not an error; it is reported as [`crate::Phase::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unrecognized direction: {0:?}")]
    UnrecognizedDirection(String),
    #[error("well invariant violated: {0}")]
    Core(#[from] CoreError),
}
