//! Judge catch chance.
//!
//! Pure arithmetic: how likely the judge is to catch a dirty play this turn.
//! No state, no randomness; callers roll against the result themselves.

use serde::{Deserialize, Serialize};

/// Floor of the catch chance.
pub const MIN_CATCH_CHANCE: f64 = 0.05;
/// Ceiling of the catch chance.
pub const MAX_CATCH_CHANCE: f64 = 0.95;

const BASE: f64 = 0.10;
const PER_DIRTY_POWER: f64 = 0.08;
const PER_PROBATION: f64 = 0.06;
const PER_MOOD: f64 = 0.03;
const PER_HOSTILITY: f64 = 0.04;

/// Inputs to [`compute_judge_catch_chance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JudgeInputs {
    /// Summed dirty power of the play.
    pub dirty_power: f64,
    /// Probation strikes on the acting side.
    pub probation: f64,
    /// Positive mood makes the judge lenient.
    pub judge_mood: f64,
    pub judge_hostility: f64,
}

/// Chance in `[0.05, 0.95]` that the judge catches the play.
///
/// `0.10 + 0.08·dirty + 0.06·probation − 0.03·mood + 0.04·hostility`,
/// clamped. Non-finite inputs yield the floor.
///
/// ```
/// use battler_rules::judge::{compute_judge_catch_chance, JudgeInputs};
///
/// let calm = JudgeInputs::default();
/// assert!((compute_judge_catch_chance(&calm) - 0.10).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_judge_catch_chance(inputs: &JudgeInputs) -> f64 {
    let raw = BASE + PER_DIRTY_POWER * inputs.dirty_power + PER_PROBATION * inputs.probation
        - PER_MOOD * inputs.judge_mood
        + PER_HOSTILITY * inputs.judge_hostility;
    if raw.is_nan() {
        return MIN_CATCH_CHANCE;
    }
    raw.clamp(MIN_CATCH_CHANCE, MAX_CATCH_CHANCE)
}
