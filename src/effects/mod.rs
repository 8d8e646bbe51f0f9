//! Effect system for trigger actions.
//!
//! - [`Action`]: the closed set of things a trigger can do
//! - [`TargetSelector`]: turns a target selector into a concrete unit
//! - [`EffectResolver`]: executes an action through the capability API
//!
//! ## Design Philosophy
//!
//! Actions never touch match state directly. Every mutation, random pick and
//! log line goes through [`crate::api::MatchApi`], so the same resolver runs
//! against the live host, the sandbox, or a recording stub in tests.

mod action;
mod resolver;
mod targeting;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Action, ActionKind, StatusKind, StatusList, Target};
pub use resolver::{EffectResolver, ResolveResult, ResolverContext};
pub use targeting::{TargetSelector, TriggerExecutionState};
