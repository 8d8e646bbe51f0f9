//! Trigger events.
//!
//! The five moments a card ability can fire on. Unlike a general engine
//! where games define event types at startup, the battler's event set is
//! closed, so it is a plain enum matched exhaustively.

use serde::{Deserialize, Serialize};

use crate::core::UnitId;

/// When a trigger fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// The unit entered the board.
    OnSummon,
    /// Start of the owning side's turn.
    TurnStart,
    /// The unit struck an opposing unit.
    OnHit,
    /// The unit's strike killed its target.
    OnKill,
    /// The unit lived through a combat exchange.
    AfterCombatSurvived,
}

impl TriggerEvent {
    /// Every event, in declaration order.
    pub const ALL: [TriggerEvent; 5] = [
        TriggerEvent::OnSummon,
        TriggerEvent::TurnStart,
        TriggerEvent::OnHit,
        TriggerEvent::OnKill,
        TriggerEvent::AfterCombatSurvived,
    ];

    /// The combat phases, in the order a combat resolves them.
    pub const COMBAT: [TriggerEvent; 3] = [
        TriggerEvent::OnHit,
        TriggerEvent::OnKill,
        TriggerEvent::AfterCombatSurvived,
    ];

    /// Whether this event happens inside a combat exchange.
    ///
    /// Only combat events may carry `requires` conditions or target
    /// `hit_target`.
    #[must_use]
    pub const fn is_combat(self) -> bool {
        matches!(
            self,
            TriggerEvent::OnHit | TriggerEvent::OnKill | TriggerEvent::AfterCombatSurvived
        )
    }

    /// DSL spelling of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TriggerEvent::OnSummon => "on_summon",
            TriggerEvent::TurnStart => "turn_start",
            TriggerEvent::OnHit => "on_hit",
            TriggerEvent::OnKill => "on_kill",
            TriggerEvent::AfterCombatSurvived => "after_combat_survived",
        }
    }
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened in one combat exchange, from the acting unit's view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    /// The opposing unit, if the strike landed on one.
    pub target: Option<UnitId>,
    /// Whether the opposing unit died.
    pub target_died: bool,
    /// Whether the acting unit died.
    pub source_died: bool,
}

impl CombatOutcome {
    /// A strike on `target` where both units lived.
    #[must_use]
    pub fn against(target: UnitId) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    /// Mark the target as killed (builder pattern).
    #[must_use]
    pub fn target_died(mut self) -> Self {
        self.target_died = true;
        self
    }

    /// Mark the acting unit as killed (builder pattern).
    #[must_use]
    pub fn source_died(mut self) -> Self {
        self.source_died = true;
        self
    }

    /// Whether `event` should fire for this outcome.
    ///
    /// `on_hit` always fires; `on_kill` needs a dead target;
    /// `after_combat_survived` needs a living source.
    #[must_use]
    pub fn fires(&self, event: TriggerEvent) -> bool {
        match event {
            TriggerEvent::OnHit => true,
            TriggerEvent::OnKill => self.target_died,
            TriggerEvent::AfterCombatSurvived => !self.source_died,
            TriggerEvent::OnSummon | TriggerEvent::TurnStart => false,
        }
    }
}
