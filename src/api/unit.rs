//! Unit runtime state as seen through the capability API.
//!
//! The match engine owns units. The rules engine only ever reads a snapshot
//! (`UnitState`) and asks the host to mutate the real thing.

use serde::{Deserialize, Serialize};

use crate::core::{Lane, Side, UnitId};
use crate::effects::StatusKind;

/// Snapshot of one unit on the board.
///
/// Status expiry turns are inclusive or exclusive depending on the status;
/// see [`UnitState::has_status`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitState {
    /// Board id.
    pub id: UnitId,
    /// Catalog id of the card this unit was summoned from.
    pub card_id: String,
    /// Display name used in log lines.
    pub name: String,
    /// Owning side.
    pub side: Side,
    /// Lane the unit stands in.
    pub lane: Lane,

    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    /// Shield charges.
    pub shield: u32,

    /// Stunned while the current turn is strictly before this turn.
    #[serde(default)]
    pub stun_until: Option<u32>,
    /// Exposed through this turn, inclusive.
    #[serde(default)]
    pub exposed_until: Option<u32>,
    /// Size of the temporary attack penalty.
    #[serde(default)]
    pub attack_penalty: u32,
    /// Penalty applies through this turn, inclusive.
    #[serde(default)]
    pub attack_penalty_until: Option<u32>,
}

impl UnitState {
    /// Create a fresh unit at full health with no statuses.
    #[must_use]
    pub fn new(
        id: UnitId,
        card_id: impl Into<String>,
        name: impl Into<String>,
        side: Side,
        lane: Lane,
        attack: i32,
        health: i32,
    ) -> Self {
        Self {
            id,
            card_id: card_id.into(),
            name: name.into(),
            side,
            lane,
            attack,
            health,
            max_health: health,
            shield: 0,
            stun_until: None,
            exposed_until: None,
            attack_penalty: 0,
            attack_penalty_until: None,
        }
    }

    /// Whether the unit is still on its feet.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether the unit has lost health.
    #[must_use]
    pub fn is_damaged(&self) -> bool {
        self.health < self.max_health
    }

    /// Whether `status` is active at `turn`.
    ///
    /// - `stun`: expiry strictly after `turn`
    /// - `exposed`: expiry at or after `turn`
    /// - `atk_down`: positive penalty with expiry at or after `turn`
    #[must_use]
    pub fn has_status(&self, status: StatusKind, turn: u32) -> bool {
        match status {
            StatusKind::Stun => self.stun_until.is_some_and(|until| until > turn),
            StatusKind::Exposed => self.exposed_until.is_some_and(|until| until >= turn),
            StatusKind::AtkDown => {
                self.attack_penalty > 0
                    && self.attack_penalty_until.is_some_and(|until| until >= turn)
            }
        }
    }

    /// Whether any of `statuses` is active at `turn`.
    ///
    /// An empty filter matches every unit.
    #[must_use]
    pub fn matches_statuses(&self, statuses: &[StatusKind], turn: u32) -> bool {
        statuses.is_empty() || statuses.iter().any(|s| self.has_status(*s, turn))
    }
}
