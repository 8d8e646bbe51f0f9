//! Special abilities: static passives on a card.
//!
//! Specials are not events. The match engine reads them when it needs
//! them (taunt during target selection, shield on summon, resistance when a
//! status lands). The rules engine only defines and validates them.

use serde::{Deserialize, Serialize};

use crate::effects::StatusKind;

/// A static passive modifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Special {
    /// Enemies must attack this unit first.
    Taunt,

    /// Starts with `amount` shield charges.
    ShieldOnSummon { amount: i32 },

    /// Chance (0..1) per status that applying it fails.
    Resistance {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stun: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exposed: Option<f64>,
        #[serde(default, rename = "atkDown", alias = "atk_down", skip_serializing_if = "Option::is_none")]
        atk_down: Option<f64>,
    },
}

impl Special {
    /// DSL spelling of the special's kind.
    #[must_use]
    pub const fn kind_str(&self) -> &'static str {
        match self {
            Special::Taunt => "taunt",
            Special::ShieldOnSummon { .. } => "shield_on_summon",
            Special::Resistance { .. } => "resistance",
        }
    }
}

/// Resolved resistance chances for one unit.
///
/// Missing fields mean no resistance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResistanceProfile {
    pub stun: f64,
    pub exposed: f64,
    pub atk_down: f64,
}

impl ResistanceProfile {
    /// Chance that `status` fails to apply.
    #[must_use]
    pub fn against(&self, status: StatusKind) -> f64 {
        match status {
            StatusKind::Stun => self.stun,
            StatusKind::Exposed => self.exposed,
            StatusKind::AtkDown => self.atk_down,
        }
    }
}
