//! Deterministic, label-keyed random number generation.
//!
//! The rules engine never draws entropy itself. Every random decision is
//! phrased as a request carrying a stable label such as
//! `"compliance_clerk:on_summon:cleanse:ally"`, and the host answers it. This
//! module is the host-side helper for answering those requests reproducibly.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed and same label sequence produce the same picks
//! - **Label streams**: Each label gets an independent ChaCha8 stream
//! - **Replayable**: `GameRngState` captures seed and draw count
//!
//! ```
//! use battler_rules::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let options = [10, 20, 30, 40];
//! assert_eq!(
//!     a.pick("clerk:on_summon:ally", &options),
//!     b.pick("clerk:on_summon:ally", &options),
//! );
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Deterministic RNG answering label-keyed pick requests.
///
/// Uses ChaCha8 for speed. Every request derives a fresh stream from the
/// base seed, the label, and the number of draws made so far, so two picks
/// under the same label still differ while a replay with the same seed
/// reproduces every pick.
#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    draws: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// The base seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of labelled draws answered so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Open an independent stream for `label`.
    ///
    /// The same label always yields the same stream from the same RNG state.
    /// Hashing goes through `FxHasher` so seeds are stable across builds.
    #[must_use]
    pub fn for_label(&self, label: &str) -> ChaCha8Rng {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        label.hash(&mut hasher);
        self.draws.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }

    /// Pick one element uniformly at random.
    ///
    /// Returns `None` for an empty slice without consuming a draw.
    pub fn pick<T: Copy>(&mut self, label: &str, options: &[T]) -> Option<T> {
        if options.is_empty() {
            return None;
        }
        let index = self.for_label(label).gen_range(0..options.len());
        self.draws += 1;
        Some(options[index])
    }

    /// Roll a labelled check that succeeds with `probability`.
    ///
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn roll(&mut self, label: &str, probability: f64) -> bool {
        let p = probability.clamp(0.0, 1.0);
        let hit = self.for_label(label).gen_bool(p);
        self.draws += 1;
        hit
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            draws: self.draws,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            seed: state.seed,
            draws: state.draws,
        }
    }
}

/// Serializable RNG state for replays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// Labelled draws answered before the checkpoint
    pub draws: u64,
}
