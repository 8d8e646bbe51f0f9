//! # battler-rules
//!
//! Trigger rules engine for a turn-based card battler.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Abilities**: Cards declare triggers in a small action
//!    DSL. The engine interprets them; no card has bespoke code.
//!
//! 2. **Validate Once**: The catalog is checked eagerly when it is built.
//!    The runtime assumes well-formed data and never errors.
//!
//! 3. **Capability Boundary**: The engine never owns match state. Every
//!    read, mutation, random pick and log line goes through [`MatchApi`].
//!
//! ## Architecture
//!
//! - **Deterministic Targeting**: Random ally picks carry stable labels so a
//!   seeded host replays them exactly.
//!
//! - **Coherent Multi-Action Triggers**: The ally resolved by one action is
//!   reused by the next within the same firing.
//!
//! ## Modules
//!
//! - `core`: Unit ids, sides, lanes, RNG, runtime configuration
//! - `cards`: Card definitions, passives, and the validated catalog
//! - `effects`: Actions, targeting, and action execution
//! - `triggers`: Events, conditions, triggers, and the runtime entry points
//! - `api`: The capability trait the host implements
//! - `validate`: Load-time catalog validation
//! - `sandbox`: In-memory reference host
//! - `judge`: Judge catch-chance arithmetic
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod effects;
pub mod triggers;
pub mod api;
pub mod validate;
pub mod sandbox;
pub mod judge;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Lane, RuntimeConfig, Side, UnitId};

pub use crate::cards::{Card, CardKind, Catalog, ResistanceProfile, Special, UnitStats};

pub use crate::effects::{
    Action, ActionKind, EffectResolver, ResolveResult, ResolverContext,
    StatusKind, StatusList, Target, TargetSelector, TriggerExecutionState,
};

pub use crate::triggers::{
    CombatContext, CombatOutcome, ConditionContext, ConditionEvaluator,
    Trigger, TriggerCondition, TriggerContext, TriggerEvent, TriggerRuntime,
};

pub use crate::api::{MatchApi, UnitState};

pub use crate::validate::{validate_catalog, ValidationResult, Validator};

pub use crate::sandbox::{SandboxConfig, SandboxMatch};

pub use crate::judge::{compute_judge_catch_chance, JudgeInputs};

pub use crate::error::{CatalogError, Severity, ValidationIssue};
