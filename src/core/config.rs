//! Runtime configuration.
//!
//! Hosts configure the trigger runtime once at startup. Every field has a
//! default matching the shipped card set, so `RuntimeConfig::default()` is
//! what production uses; tests and balance experiments override single
//! fields with the builder methods.

use serde::{Deserialize, Serialize};

/// Tunables for the trigger runtime.
///
/// ```
/// use battler_rules::core::RuntimeConfig;
///
/// let config = RuntimeConfig::default().with_attack_penalty(2);
/// assert_eq!(config.attack_penalty, 2);
/// assert_eq!(config.source_label("Bailiff"), "Bailiff [V2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Magnitude of the temporary attack penalty applied by `atk_down`.
    pub attack_penalty: u32,

    /// Tag appended to the card name when labelling status sources.
    pub source_tag: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            attack_penalty: 1,
            source_tag: "[V2]".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `atk_down` penalty magnitude.
    #[must_use]
    pub fn with_attack_penalty(mut self, magnitude: u32) -> Self {
        self.attack_penalty = magnitude;
        self
    }

    /// Set the status source tag.
    #[must_use]
    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }

    /// Source label passed to status APIs for a unit named `unit_name`.
    #[must_use]
    pub fn source_label(&self, unit_name: &str) -> String {
        if self.source_tag.is_empty() {
            unit_name.to_string()
        } else {
            format!("{} {}", unit_name, self.source_tag)
        }
    }
}
