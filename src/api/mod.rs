//! Capability API between the rules engine and the host match engine.
//!
//! The trigger runtime never touches match state directly. Every read and
//! every mutation goes through [`MatchApi`], which the host implements over
//! its own board representation. This keeps the runtime testable against a
//! stub and lets the host decide clamping, resistances and randomness.
//!
//! ## Call ordering
//!
//! The runtime is synchronous. It issues calls one at a time and expects
//! each call's effect to be visible to the next read (`unit`, `unit_ids`).
//!
//! ## Randomness
//!
//! [`MatchApi::pick_random`] receives a stable label such as
//! `"compliance_clerk:on_summon:cleanse:ally"`. Hosts that want replayable
//! matches seed their generator from it; see [`crate::core::GameRng`].

mod unit;

pub use unit::UnitState;

use crate::core::{Lane, Side, UnitId};
use crate::effects::StatusKind;

/// Host-provided access to live match state.
pub trait MatchApi {
    // === Reads ===

    /// Unit ids on `side`, optionally restricted to one lane.
    ///
    /// May include dead units; the runtime filters on health itself.
    fn unit_ids(&self, side: Side, lane: Option<Lane>) -> Vec<UnitId>;

    /// Snapshot of a unit, or `None` if the id is unknown.
    fn unit(&self, id: UnitId) -> Option<UnitState>;

    // === Selection ===

    /// Pick one candidate uniformly at random, keyed by `label`.
    fn pick_random(&mut self, candidates: &[UnitId], label: &str) -> Option<UnitId>;

    /// Pick the candidate with the lowest current health.
    ///
    /// Ties must be broken deterministically.
    fn pick_lowest_health(&mut self, candidates: &[UnitId]) -> Option<UnitId>;

    // === Unit mutation ===

    /// Heal a unit. Returns the amount actually restored.
    fn heal_unit(&mut self, id: UnitId, amount: u32) -> u32;

    /// Add shield charges to a unit.
    fn add_shield(&mut self, id: UnitId, amount: u32);

    /// Remove the listed statuses. Returns how many were actually active.
    fn cleanse(&mut self, id: UnitId, statuses: &[StatusKind]) -> u32;

    /// Stun a unit until `until_turn`. Returns `false` if resisted.
    fn apply_stun(&mut self, id: UnitId, until_turn: u32, source: &str) -> bool;

    /// Expose a unit until `until_turn`. Returns `false` if resisted.
    fn apply_exposed(&mut self, id: UnitId, until_turn: u32, source: &str) -> bool;

    /// Apply or refresh a temporary attack penalty.
    fn apply_attack_penalty(&mut self, id: UnitId, magnitude: u32, until_turn: u32, source: &str);

    /// Change attack by `delta`. Returns the delta actually applied.
    fn modify_attack(&mut self, id: UnitId, delta: i32) -> i32;

    // === Side mutation ===

    /// Credit a side's currency.
    fn gain_shares(&mut self, side: Side, amount: u32);

    /// Heal a side's leader. Returns the amount actually restored.
    fn heal_leader(&mut self, side: Side, amount: u32) -> u32;

    /// Draw one card for a side. `None` when the deck is empty.
    fn draw_card(&mut self, side: Side) -> Option<String>;

    // === Output ===

    /// Append a player-facing log line.
    fn log(&mut self, line: String);
}
