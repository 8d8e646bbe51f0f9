//! Target resolution.
//!
//! Turns an action's target selector into a concrete unit:
//! - `self` is the acting unit
//! - `hit_target` is the combat opponent (nothing outside combat)
//! - `leader` never resolves to a unit; `heal` handles it separately
//! - `ally` runs the ally heuristic and is memoized per trigger firing
//!
//! ## Ally heuristic
//!
//! Which ally is chosen depends on the action:
//! - `heal`: the lowest-health damaged ally (host breaks ties)
//! - `cleanse`: a random ally showing one of the requested statuses
//! - `gain_shield`: a random ally other than the acting unit
//! - anything else: a random living ally, the acting unit included
//!
//! Random picks carry a label `<cardId>:<event>[:<kind>]:ally` so hosts can
//! replay them.

use crate::api::{MatchApi, UnitState};
use crate::core::UnitId;

use super::action::{Action, ActionKind, StatusKind, Target};
use super::resolver::ResolverContext;

/// Per-firing scratch state.
///
/// Created right before one trigger's action list runs and dropped after,
/// so "heal an ally, then cleanse that ally" hits the same unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerExecutionState {
    cached_ally: Option<UnitId>,
}

impl TriggerExecutionState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ally resolved earlier in this firing, if any.
    #[must_use]
    pub fn cached_ally(&self) -> Option<UnitId> {
        self.cached_ally
    }
}

/// Resolves target selectors against live match state.
pub struct TargetSelector;

impl TargetSelector {
    /// Resolve the unit an action applies to.
    ///
    /// Returns `None` when nothing valid exists; the caller skips the action.
    pub fn resolve_unit(
        ctx: &ResolverContext,
        api: &mut dyn MatchApi,
        state: &mut TriggerExecutionState,
        action: &Action,
    ) -> Option<UnitId> {
        match action.target()? {
            Target::Self_ => Some(ctx.source),
            Target::HitTarget => ctx
                .combat
                .and_then(|c| c.target)
                .filter(|id| api.unit(*id).is_some()),
            Target::Leader => None,
            Target::Ally => Self::resolve_ally(ctx, api, state, action),
        }
    }

    fn resolve_ally(
        ctx: &ResolverContext,
        api: &mut dyn MatchApi,
        state: &mut TriggerExecutionState,
        action: &Action,
    ) -> Option<UnitId> {
        if let Some(cached) = state.cached_ally {
            if let Some(unit) = api.unit(cached).filter(UnitState::is_alive) {
                let stale = match action {
                    Action::Cleanse { statuses, .. } => {
                        !unit.matches_statuses(cleanse_filter(statuses), ctx.turn)
                    }
                    _ => false,
                };
                if !stale {
                    return Some(cached);
                }
            }
        }

        let picked = Self::pick_ally(ctx, api, action)?;
        state.cached_ally = Some(picked);
        Some(picked)
    }

    fn pick_ally(ctx: &ResolverContext, api: &mut dyn MatchApi, action: &Action) -> Option<UnitId> {
        let allies: Vec<UnitState> = api
            .unit_ids(ctx.side, None)
            .into_iter()
            .filter_map(|id| api.unit(id))
            .filter(UnitState::is_alive)
            .collect();

        let (candidates, label): (Vec<UnitId>, String) = match action {
            Action::Heal { .. } => {
                let damaged: Vec<UnitId> = allies
                    .iter()
                    .filter(|u| u.is_damaged())
                    .map(|u| u.id)
                    .collect();
                if damaged.is_empty() {
                    return None;
                }
                return api.pick_lowest_health(&damaged);
            }
            Action::Cleanse { statuses, .. } => {
                let filter = cleanse_filter(statuses);
                let statused = allies
                    .iter()
                    .filter(|u| u.matches_statuses(filter, ctx.turn))
                    .map(|u| u.id)
                    .collect();
                (statused, ctx.ally_label(Some(ActionKind::Cleanse)))
            }
            Action::GainShield { .. } => {
                let others = allies
                    .iter()
                    .filter(|u| u.id != ctx.source)
                    .map(|u| u.id)
                    .collect();
                (others, ctx.ally_label(Some(ActionKind::GainShield)))
            }
            _ => (allies.iter().map(|u| u.id).collect(), ctx.ally_label(None)),
        };

        if candidates.is_empty() {
            return None;
        }
        api.pick_random(&candidates, &label)
    }
}

/// The status filter of a cleanse; empty means "any unit qualifies".
pub(crate) fn cleanse_filter(statuses: &Option<super::action::StatusList>) -> &[StatusKind] {
    statuses.as_deref().unwrap_or(&[])
}
