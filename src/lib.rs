//! Blocky (workspace facade crate).
//!
//! Re-exports the member crates under `blocky::{core,engine,types}` so callers
//! depend on one package while the implementation lives under `crates/`.

pub use blocky_core as core;
pub use blocky_engine as engine;
pub use blocky_types as types;

pub use blocky_engine::{Engine, EngineError, Phase};
