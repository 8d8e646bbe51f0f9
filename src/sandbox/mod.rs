//! In-memory reference host.
//!
//! [`SandboxMatch`] implements [`crate::api::MatchApi`] over a small board
//! model: units, two leaders, share counters, decks and hands. It is what
//! the integration tests drive the runtime against, and a starting point
//! for embedders that want to simulate cards without the full match engine.
//!
//! ## Determinism
//!
//! All randomness (ally picks, resistance rolls) comes from one [`GameRng`]
//! keyed by the configured seed and the call's label. Two sandboxes built
//! from the same config and fed the same calls produce the same board.
//!
//! [`GameRng`]: crate::core::GameRng

mod host;

pub use host::{SandboxMatch, SideState};

use serde::{Deserialize, Serialize};

/// Sandbox setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Seed for every random decision.
    pub seed: u64,
    /// Starting (and maximum) leader health for both sides.
    pub leader_health: i32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            leader_health: 20,
        }
    }
}

impl SandboxConfig {
    /// Set the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the leader health (builder pattern).
    #[must_use]
    pub fn with_leader_health(mut self, health: i32) -> Self {
        self.leader_health = health;
        self
    }
}
