//! Trigger runtime - the event entry points called by the match engine.
//!
//! The host calls [`TriggerRuntime::on_summon`], [`TriggerRuntime::on_turn_start`]
//! or [`TriggerRuntime::on_combat`] with a context naming the acting unit.
//! The runtime looks the unit's card up in the catalog, walks its triggers
//! for that event in authored order, checks `requires`, and executes each
//! action through the capability API.
//!
//! ## Return contract
//!
//! Entry points return `true` when the card declares at least one trigger
//! for the event (any combat event, for `on_combat`), whether or not any
//! action ended up doing something. Unknown units and non-unit cards
//! return `false`.

use tracing::{debug, trace};

use crate::api::MatchApi;
use crate::cards::{Card, Catalog};
use crate::core::{RuntimeConfig, Side, UnitId};
use crate::effects::{EffectResolver, ResolveResult, ResolverContext, TriggerExecutionState};

use super::condition::{ConditionContext, ConditionEvaluator};
use super::event::{CombatOutcome, TriggerEvent};

/// The acting side, unit and turn, plus access to the match.
pub struct TriggerContext<'a> {
    pub side: Side,
    pub unit: UnitId,
    pub turn: u32,
    pub api: &'a mut dyn MatchApi,
}

impl<'a> TriggerContext<'a> {
    /// Create a context for `unit` acting on `side` during `turn`.
    pub fn new(side: Side, unit: UnitId, turn: u32, api: &'a mut dyn MatchApi) -> Self {
        Self { side, unit, turn, api }
    }
}

/// A trigger context extended with the result of one combat exchange.
pub struct CombatContext<'a> {
    pub base: TriggerContext<'a>,
    pub outcome: CombatOutcome,
}

impl<'a> CombatContext<'a> {
    pub fn new(base: TriggerContext<'a>, outcome: CombatOutcome) -> Self {
        Self { base, outcome }
    }
}

/// Executes card triggers against a validated catalog.
///
/// ```
/// use battler_rules::cards::Catalog;
/// use battler_rules::triggers::TriggerRuntime;
///
/// let catalog = Catalog::new(Vec::new()).unwrap();
/// let runtime = TriggerRuntime::new(&catalog);
/// assert_eq!(runtime.config().attack_penalty, 1);
/// ```
pub struct TriggerRuntime<'c> {
    catalog: &'c Catalog,
    config: RuntimeConfig,
}

impl<'c> TriggerRuntime<'c> {
    /// Create a runtime with the default configuration.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            config: RuntimeConfig::default(),
        }
    }

    /// Replace the runtime configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    // === Entry points ===

    /// Fire the unit's `on_summon` triggers.
    pub fn on_summon(&self, ctx: &mut TriggerContext<'_>) -> bool {
        self.fire(ctx, TriggerEvent::OnSummon)
    }

    /// Fire the unit's `turn_start` triggers.
    pub fn on_turn_start(&self, ctx: &mut TriggerContext<'_>) -> bool {
        self.fire(ctx, TriggerEvent::TurnStart)
    }

    /// Fire the combat phases for one exchange.
    ///
    /// `on_hit` always runs, then `on_kill` if the target died, then
    /// `after_combat_survived` if the acting unit lived.
    pub fn on_combat(&self, ctx: &mut CombatContext<'_>) -> bool {
        let Some(card) = self.card_for(&ctx.base) else {
            return false;
        };
        if !TriggerEvent::COMBAT.iter().any(|e| card.has_trigger(*e)) {
            return false;
        }

        let outcome = ctx.outcome;
        for event in TriggerEvent::COMBAT {
            if outcome.fires(event) {
                self.run_triggers(card, event, &mut ctx.base, Some(&outcome));
            } else {
                trace!(card = %card.id, %event, "combat phase not reached");
            }
        }
        true
    }

    // === Internals ===

    fn fire(&self, ctx: &mut TriggerContext<'_>, event: TriggerEvent) -> bool {
        let Some(card) = self.card_for(ctx) else {
            return false;
        };
        if !card.has_trigger(event) {
            return false;
        }
        self.run_triggers(card, event, ctx, None);
        true
    }

    /// The unit-kind card behind the acting unit.
    fn card_for(&self, ctx: &TriggerContext<'_>) -> Option<&'c Card> {
        let Some(unit) = ctx.api.unit(ctx.unit) else {
            debug!(unit = %ctx.unit, "trigger source unknown to host");
            return None;
        };
        let card = self.catalog.get_unit(&unit.card_id);
        if card.is_none() {
            debug!(unit = %ctx.unit, card = %unit.card_id, "no unit card in catalog");
        }
        card
    }

    fn run_triggers(
        &self,
        card: &Card,
        event: TriggerEvent,
        ctx: &mut TriggerContext<'_>,
        combat: Option<&CombatOutcome>,
    ) {
        for (index, trigger) in card.triggers_for(event).enumerate() {
            // Earlier triggers may have changed the source; re-read it.
            // A trigger whose source the host no longer knows is skipped.
            let Some(source) = ctx.api.unit(ctx.unit) else {
                debug!(card = %card.id, %event, index, "source unknown to host, trigger skipped");
                continue;
            };

            if !trigger.requires.is_empty() {
                let hit_target = combat.and_then(|c| c.target).and_then(|id| ctx.api.unit(id));
                let mut conditions = ConditionContext::new(&source);
                if let Some(outcome) = combat {
                    conditions = conditions.with_combat(outcome, hit_target.as_ref());
                }
                if !ConditionEvaluator::evaluate_all(&trigger.requires, &conditions) {
                    debug!(card = %card.id, %event, index, "trigger requirements not met");
                    continue;
                }
            }

            debug!(card = %card.id, %event, index, actions = trigger.actions.len(), "trigger fired");

            let resolver = ResolverContext {
                card,
                event,
                side: ctx.side,
                source: ctx.unit,
                source_name: &source.name,
                turn: ctx.turn,
                combat,
                config: &self.config,
            };
            let mut state = TriggerExecutionState::new();
            for action in &trigger.actions {
                let result = EffectResolver::resolve(&resolver, &mut *ctx.api, &mut state, action);
                if result != ResolveResult::Applied {
                    trace!(card = %card.id, %event, kind = action.kind().as_str(), ?result, "action skipped");
                }
            }
        }
    }
}
