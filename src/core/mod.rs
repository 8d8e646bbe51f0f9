//! Core engine types: unit ids, sides, lanes, RNG, configuration.
//!
//! These are the leaf types every other module builds on. None of them
//! know about cards or triggers.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{Lane, Side, UnitId};
pub use rng::{GameRng, GameRngState};
pub use config::RuntimeConfig;
