//! Catalog validation integration tests.
//!
//! Cards are written as JSON here, the way designers author them, so these
//! tests cover parsing and validation together.

use battler_rules::cards::{Card, Catalog, Special};
use battler_rules::core::Lane;
use battler_rules::effects::{Action, StatusKind, Target};
use battler_rules::error::{CatalogError, Severity};
use battler_rules::triggers::{Trigger, TriggerCondition, TriggerEvent};
use battler_rules::validate::Validator;
use proptest::prelude::*;

fn load(json: &str) -> Result<Catalog, CatalogError> {
    Catalog::from_json(json)
}

fn error_messages(json: &str) -> Vec<String> {
    match load(json) {
        Ok(_) => Vec::new(),
        Err(err) => err.issues().iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn test_fixture_catalog_is_valid() {
    let catalog = load(include_str!("fixtures/catalog.json")).unwrap();
    assert_eq!(catalog.len(), 8);
    assert!(catalog.warnings().is_empty());

    let bailiff = catalog.get("bailiff").unwrap();
    assert!(bailiff.has_taunt());
    assert_eq!(bailiff.summon_shield(), 1);
    assert_eq!(catalog.get("union_rep").unwrap().resistance().exposed, 1.0);
    assert_eq!(catalog.get("hush_money").unwrap().dirty_power, Some(2));
    assert!(catalog.get_unit("hush_money").is_none());
}

#[test]
fn test_taunt_requires_front_lane() {
    for lane in ["back", "both"] {
        let json = format!(
            r#"[{{"id": "wall", "name": "Wall", "kind": "unit", "lane": "{lane}",
                 "stats": {{"attack": 0, "health": 6}}, "specials": [{{"kind": "taunt"}}]}}]"#
        );
        let errors = error_messages(&json);
        assert_eq!(errors, vec![format!("[wall] specials[0]: taunt requires lane front (found {lane})")]);
    }
}

#[test]
fn test_resistance_out_of_range() {
    let errors = error_messages(
        r#"[{"id": "rep", "name": "Rep", "kind": "unit", "lane": "front",
             "stats": {"attack": 1, "health": 3},
             "specials": [{"kind": "resistance", "stun": 50}]}]"#,
    );
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("0..1"), "message was {}", errors[0]);
    assert!(errors[0].starts_with("[rep] specials[0].stun:"));
}

#[test]
fn test_requires_only_on_combat_triggers() {
    let errors = error_messages(
        r#"[{"id": "clerk", "name": "Clerk", "kind": "unit", "lane": "back",
             "stats": {"attack": 1, "health": 3},
             "triggers": [{"when": "turn_start", "requires": ["source_survived"],
                           "actions": [{"kind": "gain_shares", "amount": 1}]}]}]"#,
    );
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("[clerk] triggers[0].requires:"));
}

#[test]
fn test_target_placement_rules() {
    let errors = error_messages(
        r#"[{"id": "clerk", "name": "Clerk", "kind": "unit", "lane": "back",
             "stats": {"attack": 1, "health": 3},
             "triggers": [{"when": "on_summon", "actions": [
                 {"kind": "heal", "target": "hit_target", "amount": 1},
                 {"kind": "gain_shield", "target": "leader", "amount": 1},
                 {"kind": "heal", "target": "leader", "amount": 1}
             ]}]}]"#,
    );
    assert_eq!(
        errors,
        vec![
            "[clerk] triggers[0].actions[0].target: hit_target is only valid in combat triggers",
            "[clerk] triggers[0].actions[1].target: leader is only valid for heal, not gain_shield",
        ]
    );
}

#[test]
fn test_amount_rules() {
    let errors = error_messages(
        r#"[{"id": "clerk", "name": "Clerk", "kind": "unit", "lane": "back",
             "stats": {"attack": 1, "health": 3},
             "triggers": [{"when": "on_hit", "actions": [
                 {"kind": "draw_card", "amount": 0},
                 {"kind": "modify_attack", "target": "self", "amount": -2},
                 {"kind": "modify_attack", "target": "self", "amount": 0},
                 {"kind": "apply_status", "target": "hit_target", "status": "stun", "turns": -1}
             ]}]}]"#,
    );
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("actions[0].amount"));
    assert!(errors[1].contains("actions[2].amount"));
    assert!(errors[2].contains("actions[3].turns"));
}

#[test]
fn test_errors_aggregate_across_cards() {
    let result = load(
        r#"[
            {"id": "a", "name": "A", "kind": "unit", "lane": "back", "stats": {"attack": 1, "health": 1},
             "specials": [{"kind": "taunt"}]},
            {"id": "b", "name": "B", "kind": "unit", "lane": "front", "stats": {"attack": 1, "health": 1},
             "specials": [{"kind": "shield_on_summon", "amount": 0}]},
            {"id": "a", "name": "A again", "kind": "non_unit"}
        ]"#,
    );
    let err = result.unwrap_err();
    assert_eq!(err.issues().len(), 3);

    let message = err.to_string();
    assert!(message.starts_with("card catalog failed validation with 3 issue(s):"));
    assert!(message.contains("[b] specials[0].amount: must be a positive integer"));
    assert!(message.contains("[a] id: duplicate card id (first defined at index 0)"));
}

#[test]
fn test_parse_errors() {
    let err = load(r#"[{"id": "x", "name": "X", "kind": "spell"}]"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.issues().is_empty());

    let err = load(r#"[{"id": "x", "name": "X", "kind": "unit", "lane": "front",
                       "stats": {"attack": 1, "health": 1},
                       "triggers": [{"when": "on_death", "actions": []}]}]"#)
        .unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_warnings_do_not_block_loading() {
    let catalog = load(
        r#"[{"id": "clerk", "name": "Clerk", "kind": "unit", "lane": "back",
             "stats": {"attack": 1, "health": 3}, "keywords": ["legal", "legal"],
             "triggers": [{"when": "on_summon", "actions": [
                 {"kind": "cleanse", "target": "ally", "statuses": []}
             ]}]}]"#,
    )
    .unwrap();
    assert_eq!(catalog.warnings().len(), 2);
    assert!(catalog.warnings().iter().all(|w| w.severity == Severity::Warning));
}

// === Idempotence ===

fn lane_strategy() -> impl Strategy<Value = Lane> {
    prop_oneof![Just(Lane::Front), Just(Lane::Back), Just(Lane::Both)]
}

fn target_strategy() -> impl Strategy<Value = Target> {
    prop_oneof![Just(Target::Self_), Just(Target::HitTarget), Just(Target::Leader), Just(Target::Ally)]
}

fn event_strategy() -> impl Strategy<Value = TriggerEvent> {
    proptest::sample::select(TriggerEvent::ALL.to_vec())
}

fn action_strategy() -> impl Strategy<Value = Action> {
    (0u8..5, target_strategy(), -2i32..4).prop_map(|(kind, target, amount)| match kind {
        0 => Action::Heal { target, amount },
        1 => Action::GainShield { target, amount },
        2 => Action::ModifyAttack { target, amount },
        3 => Action::ApplyStatus { target, status: StatusKind::Stun, turns: amount },
        _ => Action::DrawCard { amount },
    })
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (
        "[a-c]{0,2}",
        lane_strategy(),
        -1i32..4,
        any::<bool>(),
        proptest::option::of(-0.5f64..1.5),
        event_strategy(),
        proptest::collection::vec(action_strategy(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(id, lane, health, taunt, resist, when, actions, gated)| {
            let mut trigger = Trigger::new(when);
            trigger.actions = actions;
            if gated {
                trigger = trigger.requiring(TriggerCondition::SourceSurvived);
            }
            let mut card = Card::unit(id.clone(), id, lane, 1, health).with_trigger(trigger);
            if taunt {
                card = card.with_special(Special::Taunt);
            }
            if let Some(stun) = resist {
                card = card.with_special(Special::Resistance { stun: Some(stun), exposed: None, atk_down: None });
            }
            card
        })
}

proptest! {
    #[test]
    fn prop_validation_is_idempotent(cards in proptest::collection::vec(card_strategy(), 0..6)) {
        let first = Validator::new().validate(&cards);
        let second = Validator::new().validate(&cards);
        prop_assert_eq!(&first, &second);

        let mut reused = Validator::new();
        reused.validate(&cards);
        prop_assert_eq!(reused.validate(&cards), first);
    }
}
