//! Trigger definitions.
//!
//! A trigger binds one event to an ordered list of actions, optionally gated
//! by conditions. Triggers are authored inside card definitions and never
//! change after the catalog is loaded.

use serde::{Deserialize, Serialize};

use crate::effects::Action;

use super::condition::TriggerCondition;
use super::event::TriggerEvent;

/// A trigger definition.
///
/// ```
/// use battler_rules::effects::{Action, Target};
/// use battler_rules::triggers::{Trigger, TriggerEvent};
///
/// let trigger = Trigger::new(TriggerEvent::OnSummon)
///     .with_action(Action::heal(Target::Ally, 2))
///     .with_note("patches up the back line");
/// assert_eq!(trigger.actions.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// The event this trigger listens for.
    pub when: TriggerEvent,

    /// Actions executed in order when the trigger fires.
    pub actions: Vec<Action>,

    /// Conditions that must all hold. Combat events only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<TriggerCondition>,

    /// Designer note; ignored by the runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Trigger {
    /// Create an empty trigger for `when`.
    #[must_use]
    pub fn new(when: TriggerEvent) -> Self {
        Self {
            when,
            actions: Vec::new(),
            requires: Vec::new(),
            note: None,
        }
    }

    /// Append an action (builder pattern).
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append a condition (builder pattern).
    #[must_use]
    pub fn requiring(mut self, condition: TriggerCondition) -> Self {
        self.requires.push(condition);
        self
    }

    /// Attach a designer note (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
