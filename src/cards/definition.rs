//! Card definitions - static card data.
//!
//! A `Card` is what the designers author: cost, faction, stats, passives
//! and triggers. Board state (damage taken, statuses) lives with the match
//! engine and is only seen through [`crate::api::UnitState`].

use serde::{Deserialize, Serialize};

use crate::core::Lane;
use crate::triggers::{Trigger, TriggerEvent};

use super::special::{ResistanceProfile, Special};

/// Base combat stats of a unit card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub attack: i32,
    pub health: i32,
}

/// Unit or non-unit card shape, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    /// Deploys to the board.
    Unit { lane: Lane, stats: UnitStats },
    /// Played for effect, never on the board.
    NonUnit,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use battler_rules::cards::Card;
/// use battler_rules::core::Lane;
///
/// let clerk = Card::unit("compliance_clerk", "Compliance Clerk", Lane::Back, 1, 3)
///     .with_cost(2);
///
/// assert_eq!(clerk.lane(), Some(Lane::Back));
/// assert!(clerk.is_unit());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique key within the catalog.
    pub id: String,

    /// Display name, also used in log lines.
    pub name: String,

    #[serde(default)]
    pub faction: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub cost: u32,

    /// Unit or non-unit payload.
    #[serde(flatten)]
    pub kind: CardKind,

    /// Legal-risk weight consumed by the judge.
    #[serde(default, rename = "dirtyPower", alias = "dirty_power", skip_serializing_if = "Option::is_none")]
    pub dirty_power: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specials: Vec<Special>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Trigger>,
}

impl Card {
    /// Create a unit card with no passives or triggers.
    #[must_use]
    pub fn unit(
        id: impl Into<String>,
        name: impl Into<String>,
        lane: Lane,
        attack: i32,
        health: i32,
    ) -> Self {
        Self::with_kind(id, name, CardKind::Unit {
            lane,
            stats: UnitStats { attack, health },
        })
    }

    /// Create a non-unit card.
    #[must_use]
    pub fn non_unit(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(id, name, CardKind::NonUnit)
    }

    fn with_kind(id: impl Into<String>, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faction: String::new(),
            role: String::new(),
            cost: 0,
            kind,
            dirty_power: None,
            keywords: Vec::new(),
            specials: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set faction and role (builder pattern).
    #[must_use]
    pub fn with_faction(mut self, faction: impl Into<String>, role: impl Into<String>) -> Self {
        self.faction = faction.into();
        self.role = role.into();
        self
    }

    /// Add a special (builder pattern).
    #[must_use]
    pub fn with_special(mut self, special: Special) -> Self {
        self.specials.push(special);
        self
    }

    /// Add a trigger (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Whether this card deploys to the board.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        matches!(self.kind, CardKind::Unit { .. })
    }

    /// Declared lane, for unit cards.
    #[must_use]
    pub fn lane(&self) -> Option<Lane> {
        match &self.kind {
            CardKind::Unit { lane, .. } => Some(*lane),
            CardKind::NonUnit => None,
        }
    }

    /// Base stats, for unit cards.
    #[must_use]
    pub fn stats(&self) -> Option<UnitStats> {
        match &self.kind {
            CardKind::Unit { stats, .. } => Some(*stats),
            CardKind::NonUnit => None,
        }
    }

    /// Triggers listening for `event`, in declaration order.
    pub fn triggers_for(&self, event: TriggerEvent) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter().filter(move |t| t.when == event)
    }

    /// Whether any trigger listens for `event`.
    #[must_use]
    pub fn has_trigger(&self, event: TriggerEvent) -> bool {
        self.triggers.iter().any(|t| t.when == event)
    }

    /// Whether the card has the `taunt` passive.
    #[must_use]
    pub fn has_taunt(&self) -> bool {
        self.specials.iter().any(|s| matches!(s, Special::Taunt))
    }

    /// Total shield charges granted on summon.
    #[must_use]
    pub fn summon_shield(&self) -> u32 {
        self.specials
            .iter()
            .map(|s| match s {
                Special::ShieldOnSummon { amount } => u32::try_from(*amount).unwrap_or(0),
                _ => 0,
            })
            .sum()
    }

    /// Resistance profile; all zero when the card declares none.
    #[must_use]
    pub fn resistance(&self) -> ResistanceProfile {
        self.specials
            .iter()
            .find_map(|s| match s {
                Special::Resistance { stun, exposed, atk_down } => Some(ResistanceProfile {
                    stun: stun.unwrap_or(0.0),
                    exposed: exposed.unwrap_or(0.0),
                    atk_down: atk_down.unwrap_or(0.0),
                }),
                _ => None,
            })
            .unwrap_or_default()
    }
}
