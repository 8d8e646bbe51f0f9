//! Action resolution - executing actions through the capability API.
//!
//! Every side effect goes through [`MatchApi`]. An action whose target does
//! not resolve, or whose outcome is zero, is skipped without a log line;
//! only observable changes reach the player-facing log.

use crate::api::MatchApi;
use crate::cards::Card;
use crate::core::{RuntimeConfig, Side, UnitId};
use crate::triggers::{CombatOutcome, TriggerEvent};

use super::action::{Action, ActionKind, StatusKind, Target};
use super::targeting::{cleanse_filter, TargetSelector, TriggerExecutionState};

/// Everything an action needs to know about the firing it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct ResolverContext<'a> {
    /// Card that owns the trigger.
    pub card: &'a Card,
    /// Event that fired the trigger.
    pub event: TriggerEvent,
    /// Acting side.
    pub side: Side,
    /// Acting unit.
    pub source: UnitId,
    /// Display name of the acting unit.
    pub source_name: &'a str,
    /// Current turn.
    pub turn: u32,
    /// Combat data for combat events.
    pub combat: Option<&'a CombatOutcome>,
    pub config: &'a RuntimeConfig,
}

impl ResolverContext<'_> {
    /// Label for a random ally pick: `<cardId>:<event>[:<kind>]:ally`.
    #[must_use]
    pub fn ally_label(&self, kind: Option<ActionKind>) -> String {
        match kind {
            Some(ActionKind::Cleanse) => format!("{}:{}:cleanse:ally", self.card.id, self.event),
            Some(ActionKind::GainShield) => format!("{}:{}:shield:ally", self.card.id, self.event),
            _ => format!("{}:{}:ally", self.card.id, self.event),
        }
    }
}

/// Result of resolving one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// The action changed match state.
    Applied,
    /// The action ran but nothing observable happened.
    NoEffect,
    /// No valid target; the action was skipped.
    NoTarget,
}

/// Executes trigger actions.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one action of the current firing.
    pub fn resolve(
        ctx: &ResolverContext,
        api: &mut dyn MatchApi,
        state: &mut TriggerExecutionState,
        action: &Action,
    ) -> ResolveResult {
        match action {
            Action::GainShield { amount, .. } => {
                let Some(amount) = positive(*amount) else {
                    return ResolveResult::NoEffect;
                };
                let Some(id) = TargetSelector::resolve_unit(ctx, api, state, action) else {
                    return ResolveResult::NoTarget;
                };
                api.add_shield(id, amount);
                let line = format!("{} grants {} {} shield.", ctx.source_name, target_name(ctx, api, id), amount);
                api.log(line);
                ResolveResult::Applied
            }

            Action::Heal { target: Target::Leader, amount } => {
                let Some(amount) = positive(*amount) else {
                    return ResolveResult::NoEffect;
                };
                let healed = api.heal_leader(ctx.side, amount);
                if healed == 0 {
                    return ResolveResult::NoEffect;
                }
                api.log(format!("{} heals the leader for {}.", ctx.source_name, healed));
                ResolveResult::Applied
            }

            Action::Heal { amount, .. } => {
                let Some(amount) = positive(*amount) else {
                    return ResolveResult::NoEffect;
                };
                let Some(id) = TargetSelector::resolve_unit(ctx, api, state, action) else {
                    return ResolveResult::NoTarget;
                };
                let healed = api.heal_unit(id, amount);
                if healed == 0 {
                    return ResolveResult::NoEffect;
                }
                let line = format!("{} heals {} for {}.", ctx.source_name, target_name(ctx, api, id), healed);
                api.log(line);
                ResolveResult::Applied
            }

            Action::GainShares { amount } => {
                let Some(amount) = positive(*amount) else {
                    return ResolveResult::NoEffect;
                };
                api.gain_shares(ctx.side, amount);
                api.log(format!("{} earns {} shares.", ctx.source_name, amount));
                ResolveResult::Applied
            }

            Action::ModifyAttack { amount, .. } => {
                // Rejected by the validator; never reaches the API.
                if *amount == 0 {
                    return ResolveResult::NoEffect;
                }
                let Some(id) = TargetSelector::resolve_unit(ctx, api, state, action) else {
                    return ResolveResult::NoTarget;
                };
                let applied = api.modify_attack(id, *amount);
                if applied == 0 {
                    return ResolveResult::NoEffect;
                }
                let line = format!(
                    "{} gives {} {} attack.",
                    ctx.source_name,
                    target_name(ctx, api, id),
                    signed(applied)
                );
                api.log(line);
                ResolveResult::Applied
            }

            Action::Cleanse { statuses, .. } => {
                let Some(id) = TargetSelector::resolve_unit(ctx, api, state, action) else {
                    return ResolveResult::NoTarget;
                };
                let filter = cleanse_filter(statuses);
                let list = if filter.is_empty() { &StatusKind::CLEANSABLE[..] } else { filter };
                let removed = api.cleanse(id, list);
                if removed == 0 {
                    return ResolveResult::NoEffect;
                }
                let noun = if removed == 1 { "status" } else { "statuses" };
                let line = format!(
                    "{} cleanses {} {} from {}.",
                    ctx.source_name,
                    removed,
                    noun,
                    target_name(ctx, api, id)
                );
                api.log(line);
                ResolveResult::Applied
            }

            Action::ApplyStatus { status, turns, .. } => {
                let Some(id) = TargetSelector::resolve_unit(ctx, api, state, action) else {
                    return ResolveResult::NoTarget;
                };
                let until = ctx.turn.saturating_add((*turns).max(0).unsigned_abs());
                let source = ctx.config.source_label(ctx.source_name);

                let (applied, verb) = match status {
                    StatusKind::Stun => (api.apply_stun(id, until, &source), "stuns"),
                    StatusKind::Exposed => (api.apply_exposed(id, until, &source), "exposes"),
                    StatusKind::AtkDown => {
                        api.apply_attack_penalty(id, ctx.config.attack_penalty, until, &source);
                        return ResolveResult::Applied;
                    }
                };
                if !applied {
                    return ResolveResult::NoEffect;
                }
                let line = format!(
                    "{} {} {} until turn {}.",
                    ctx.source_name,
                    verb,
                    target_name(ctx, api, id),
                    until
                );
                api.log(line);
                ResolveResult::Applied
            }

            Action::DrawCard { amount } => {
                let Some(amount) = positive(*amount) else {
                    return ResolveResult::NoEffect;
                };
                let mut drawn = 0;
                for _ in 0..amount {
                    if api.draw_card(ctx.side).is_none() {
                        break;
                    }
                    drawn += 1;
                }
                if drawn == 0 {
                    return ResolveResult::NoEffect;
                }
                let noun = if drawn == 1 { "card" } else { "cards" };
                api.log(format!("{} drew {} {}.", ctx.source_name, drawn, noun));
                ResolveResult::Applied
            }
        }
    }
}

/// Amounts are validated positive; anything else is treated as zero.
fn positive(amount: i32) -> Option<u32> {
    u32::try_from(amount).ok().filter(|a| *a > 0)
}

/// Render a signed delta: `+2`, `-1`, `+0`.
pub(crate) fn signed(delta: i32) -> String {
    if delta >= 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

fn target_name(ctx: &ResolverContext, api: &dyn MatchApi, id: UnitId) -> String {
    if id == ctx.source {
        return "itself".to_string();
    }
    api.unit(id).map(|u| u.name).unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lane;
    use crate::effects::testing::StubApi;

    struct Fixture {
        card: Card,
        config: RuntimeConfig,
        combat: CombatOutcome,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                card: Card::unit("clerk", "Clerk", Lane::Back, 1, 3),
                config: RuntimeConfig::default(),
                combat: CombatOutcome::against(UnitId::new(9)),
            }
        }

        fn ctx(&self, turn: u32, in_combat: bool) -> ResolverContext<'_> {
            ResolverContext {
                card: &self.card,
                event: if in_combat { TriggerEvent::OnHit } else { TriggerEvent::TurnStart },
                side: Side::Player,
                source: UnitId::new(1),
                source_name: "Clerk",
                turn,
                combat: in_combat.then_some(&self.combat),
                config: &self.config,
            }
        }
    }

    fn run(ctx: &ResolverContext, api: &mut StubApi, action: Action) -> ResolveResult {
        let mut state = TriggerExecutionState::new();
        EffectResolver::resolve(ctx, api, &mut state, &action)
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(2), "+2");
        assert_eq!(signed(-1), "-1");
        assert_eq!(signed(0), "+0");
    }

    #[test]
    fn test_gain_shield_always_logs() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3), (2, 3, 3)]);
        let result = run(&fx.ctx(1, false), &mut api, Action::gain_shield(Target::Ally, 2));

        assert_eq!(result, ResolveResult::Applied);
        assert_eq!(api.calls, vec!["shield 2 2"]);
        assert_eq!(api.logs, vec!["Clerk grants U2 2 shield."]);
    }

    #[test]
    fn test_heal_self_logs_only_when_healed() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        assert_eq!(run(&fx.ctx(1, false), &mut api, Action::heal(Target::Self_, 2)), ResolveResult::NoEffect);
        assert!(api.logs.is_empty());

        api.unit_mut(1).health = 2;
        assert_eq!(run(&fx.ctx(1, false), &mut api, Action::heal(Target::Self_, 2)), ResolveResult::Applied);
        assert_eq!(api.logs, vec!["Clerk heals itself for 1."]);
    }

    #[test]
    fn test_heal_leader() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        assert_eq!(run(&fx.ctx(1, false), &mut api, Action::heal(Target::Leader, 2)), ResolveResult::NoEffect);
        assert!(api.logs.is_empty());

        api.leader_missing = 5;
        run(&fx.ctx(1, false), &mut api, Action::heal(Target::Leader, 2));
        assert_eq!(api.logs, vec!["Clerk heals the leader for 2."]);
    }

    #[test]
    fn test_gain_shares() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        run(&fx.ctx(1, false), &mut api, Action::GainShares { amount: 3 });
        assert_eq!(api.calls, vec!["shares player 3"]);
        assert_eq!(api.logs, vec!["Clerk earns 3 shares."]);
    }

    #[test]
    fn test_modify_attack_clamped() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        run(&fx.ctx(1, false), &mut api, Action::ModifyAttack { target: Target::Self_, amount: -5 });
        assert_eq!(api.logs, vec!["Clerk gives itself -2 attack."]);

        let result = run(&fx.ctx(1, false), &mut api, Action::ModifyAttack { target: Target::Self_, amount: -1 });
        assert_eq!(result, ResolveResult::NoEffect);
        assert_eq!(api.logs.len(), 1);
    }

    #[test]
    fn test_modify_attack_zero_never_calls_api() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        let result = run(&fx.ctx(1, false), &mut api, Action::ModifyAttack { target: Target::Self_, amount: 0 });
        assert_eq!(result, ResolveResult::NoEffect);
        assert!(api.calls.is_empty());
    }

    #[test]
    fn test_cleanse_defaults_to_every_status() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        api.unit_mut(1).stun_until = Some(4);
        api.unit_mut(1).exposed_until = Some(4);

        run(&fx.ctx(1, false), &mut api, Action::Cleanse { target: Target::Self_, statuses: None });
        assert_eq!(api.calls, vec!["cleanse 1 2"]);
        assert_eq!(api.logs, vec!["Clerk cleanses 2 statuses from itself."]);
    }

    #[test]
    fn test_cleanse_nothing_removed() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        let result = run(&fx.ctx(1, false), &mut api, Action::cleanse(Target::Self_, [StatusKind::Stun]));
        assert_eq!(result, ResolveResult::NoEffect);
        assert!(api.logs.is_empty());
    }

    #[test]
    fn test_apply_exposed_expiry() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        api.add_enemy(9, 4, 4);

        let action = Action::apply_status(Target::HitTarget, StatusKind::Exposed, 2);
        assert_eq!(run(&fx.ctx(5, true), &mut api, action), ResolveResult::Applied);

        let target = api.unit_mut(9).clone();
        assert_eq!(target.exposed_until, Some(7));
        assert!(target.has_status(StatusKind::Exposed, 7));
        assert!(!target.has_status(StatusKind::Exposed, 8));
        assert_eq!(api.calls, vec!["exposed 9 7 Clerk [V2]"]);
        assert_eq!(api.logs, vec!["Clerk exposes U9 until turn 7."]);
    }

    #[test]
    fn test_resisted_stun_is_silent() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        api.add_enemy(9, 4, 4);
        api.resist_all = true;

        let action = Action::apply_status(Target::HitTarget, StatusKind::Stun, 1);
        assert_eq!(run(&fx.ctx(2, true), &mut api, action), ResolveResult::NoEffect);
        assert!(api.logs.is_empty());
    }

    #[test]
    fn test_atk_down_never_logs() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        api.add_enemy(9, 4, 4);

        let action = Action::apply_status(Target::HitTarget, StatusKind::AtkDown, 3);
        assert_eq!(run(&fx.ctx(2, true), &mut api, action), ResolveResult::Applied);
        assert_eq!(api.calls, vec!["atk_down 9 1 5 Clerk [V2]"]);
        assert!(api.logs.is_empty());
    }

    #[test]
    fn test_hit_target_outside_combat_skips() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        api.add_enemy(9, 4, 4);

        let action = Action::apply_status(Target::HitTarget, StatusKind::Stun, 1);
        assert_eq!(run(&fx.ctx(2, false), &mut api, action), ResolveResult::NoTarget);
        assert!(api.calls.is_empty());
    }

    #[test]
    fn test_draw_pluralization() {
        let fx = Fixture::new();
        let mut api = StubApi::with_allies(&[(1, 3, 3)]);
        api.deck = 1;
        run(&fx.ctx(1, false), &mut api, Action::DrawCard { amount: 3 });
        assert_eq!(api.logs, vec!["Clerk drew 1 card."]);

        api.deck = 5;
        run(&fx.ctx(1, false), &mut api, Action::DrawCard { amount: 2 });
        assert_eq!(api.logs[1], "Clerk drew 2 cards.");

        api.deck = 0;
        assert_eq!(run(&fx.ctx(1, false), &mut api, Action::DrawCard { amount: 2 }), ResolveResult::NoEffect);
        assert_eq!(api.logs.len(), 2);
    }
}
