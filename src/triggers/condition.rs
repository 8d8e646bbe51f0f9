//! Trigger conditions.
//!
//! A trigger's `requires` list gates its actions. Every condition must hold
//! (logical AND). Conditions only make sense inside a combat exchange and the
//! validator rejects them elsewhere, but the evaluator still answers sensibly
//! without combat data: `target_survived` is simply never satisfied.

use serde::{Deserialize, Serialize};

use crate::api::UnitState;

use super::event::CombatOutcome;

/// A condition that must be met for a trigger to fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    /// The acting unit is alive (and did not die in this combat).
    SourceSurvived,
    /// The hit target exists, was not killed, and is alive.
    TargetSurvived,
}

impl TriggerCondition {
    /// DSL spelling of the condition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TriggerCondition::SourceSurvived => "source_survived",
            TriggerCondition::TargetSurvived => "target_survived",
        }
    }
}

/// Context for evaluating trigger conditions.
pub struct ConditionContext<'a> {
    /// Snapshot of the acting unit.
    pub source: &'a UnitState,
    /// Combat data, when evaluating a combat event.
    pub combat: Option<&'a CombatOutcome>,
    /// Snapshot of the combat opponent, if it still exists.
    pub hit_target: Option<&'a UnitState>,
}

impl<'a> ConditionContext<'a> {
    /// Create a context outside of combat.
    pub fn new(source: &'a UnitState) -> Self {
        Self {
            source,
            combat: None,
            hit_target: None,
        }
    }

    /// Attach combat data (builder pattern).
    pub fn with_combat(mut self, combat: &'a CombatOutcome, hit_target: Option<&'a UnitState>) -> Self {
        self.combat = Some(combat);
        self.hit_target = hit_target;
        self
    }
}

/// Evaluator for trigger conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a single condition is satisfied.
    pub fn evaluate(condition: TriggerCondition, ctx: &ConditionContext) -> bool {
        match condition {
            TriggerCondition::SourceSurvived => {
                ctx.source.is_alive() && ctx.combat.is_none_or(|c| !c.source_died)
            }
            TriggerCondition::TargetSurvived => match ctx.combat {
                Some(combat) => {
                    combat.target.is_some()
                        && !combat.target_died
                        && ctx.hit_target.is_some_and(UnitState::is_alive)
                }
                None => false,
            },
        }
    }

    /// Check that every condition holds. An empty list always passes.
    pub fn evaluate_all(conditions: &[TriggerCondition], ctx: &ConditionContext) -> bool {
        conditions.iter().all(|c| Self::evaluate(*c, ctx))
    }
}
