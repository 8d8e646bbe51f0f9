//! Action definitions.
//!
//! Actions are the atomic effects a trigger can perform. They are authored
//! as data (`{"kind": "heal", "target": "ally", "amount": 2}`) and
//! interpreted by the resolver against live match state.
//!
//! Numeric payloads are signed on purpose: the catalog is untrusted input
//! and the validator must be able to see (and reject) a `-1` or a `0`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Status filter carried by `cleanse`. At most three distinct kinds exist.
pub type StatusList = SmallVec<[StatusKind; 3]>;

/// Who an action applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The unit that owns the trigger.
    #[serde(rename = "self")]
    Self_,
    /// The opposing unit of the current combat.
    HitTarget,
    /// The acting side's leader. Only meaningful for `heal`.
    Leader,
    /// A friendly unit picked by the ally heuristic.
    Ally,
}

impl Target {
    /// DSL spelling of the target selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Self_ => "self",
            Target::HitTarget => "hit_target",
            Target::Leader => "leader",
            Target::Ally => "ally",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timed status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Cannot act.
    Stun,
    /// Takes bonus effect from certain interactions.
    Exposed,
    /// Temporary attack reduction.
    AtkDown,
}

impl StatusKind {
    /// Every status a blanket `cleanse` removes.
    pub const CLEANSABLE: [StatusKind; 3] = [StatusKind::Stun, StatusKind::Exposed, StatusKind::AtkDown];

    /// DSL spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusKind::Stun => "stun",
            StatusKind::Exposed => "exposed",
            StatusKind::AtkDown => "atk_down",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of an [`Action`], used for labels and ally heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    GainShield,
    Heal,
    GainShares,
    ModifyAttack,
    Cleanse,
    ApplyStatus,
    DrawCard,
}

impl ActionKind {
    /// DSL spelling of the action kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::GainShield => "gain_shield",
            ActionKind::Heal => "heal",
            ActionKind::GainShares => "gain_shares",
            ActionKind::ModifyAttack => "modify_attack",
            ActionKind::Cleanse => "cleanse",
            ActionKind::ApplyStatus => "apply_status",
            ActionKind::DrawCard => "draw_card",
        }
    }
}

/// An atomic trigger action.
///
/// ```
/// use battler_rules::effects::{Action, Target};
///
/// let action: Action = serde_json::from_str(
///     r#"{"kind": "heal", "target": "ally", "amount": 2}"#,
/// ).unwrap();
/// assert_eq!(action, Action::Heal { target: Target::Ally, amount: 2 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Add shield charges.
    GainShield { target: Target, amount: i32 },

    /// Restore health to a unit or the leader.
    Heal { target: Target, amount: i32 },

    /// Credit the acting side's currency.
    GainShares { amount: i32 },

    /// Signed attack change.
    ModifyAttack { target: Target, amount: i32 },

    /// Remove statuses. `None` removes every cleansable status.
    Cleanse {
        target: Target,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        statuses: Option<StatusList>,
    },

    /// Apply a timed status for `turns` turns.
    ApplyStatus {
        target: Target,
        status: StatusKind,
        turns: i32,
    },

    /// Draw up to `amount` cards for the acting side.
    DrawCard { amount: i32 },
}

impl Action {
    /// Create a heal action.
    #[must_use]
    pub fn heal(target: Target, amount: i32) -> Self {
        Self::Heal { target, amount }
    }

    /// Create a shield action.
    #[must_use]
    pub fn gain_shield(target: Target, amount: i32) -> Self {
        Self::GainShield { target, amount }
    }

    /// Create a cleanse action limited to `statuses`.
    #[must_use]
    pub fn cleanse(target: Target, statuses: impl IntoIterator<Item = StatusKind>) -> Self {
        Self::Cleanse {
            target,
            statuses: Some(statuses.into_iter().collect()),
        }
    }

    /// Create a status application.
    #[must_use]
    pub fn apply_status(target: Target, status: StatusKind, turns: i32) -> Self {
        Self::ApplyStatus { target, status, turns }
    }

    /// The action's discriminant.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::GainShield { .. } => ActionKind::GainShield,
            Action::Heal { .. } => ActionKind::Heal,
            Action::GainShares { .. } => ActionKind::GainShares,
            Action::ModifyAttack { .. } => ActionKind::ModifyAttack,
            Action::Cleanse { .. } => ActionKind::Cleanse,
            Action::ApplyStatus { .. } => ActionKind::ApplyStatus,
            Action::DrawCard { .. } => ActionKind::DrawCard,
        }
    }

    /// The target selector, for actions that take one.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Action::GainShield { target, .. }
            | Action::Heal { target, .. }
            | Action::ModifyAttack { target, .. }
            | Action::Cleanse { target, .. }
            | Action::ApplyStatus { target, .. } => Some(*target),
            Action::GainShares { .. } | Action::DrawCard { .. } => None,
        }
    }
}
