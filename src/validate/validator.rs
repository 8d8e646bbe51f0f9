//! Card DSL validation.
//!
//! Validation collects ALL issues across the whole catalog rather than
//! stopping at the first one, so a designer sees every broken card in a
//! single run. Errors reject the catalog; warnings are reported and kept.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardKind, Special};
use crate::core::Lane;
use crate::effects::{Action, Target};
use crate::error::{CatalogError, Severity, ValidationIssue};
use crate::triggers::Trigger;

// ============================================================================
// Public API
// ============================================================================

/// Result of catalog validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Issues that reject the catalog.
    pub errors: Vec<ValidationIssue>,

    /// Issues reported but tolerated.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a load result: warnings on success, an aggregate error otherwise.
    pub fn into_result(self) -> Result<Vec<ValidationIssue>, CatalogError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(CatalogError::Invalid {
                issues: self.errors,
            })
        }
    }
}

/// Validate a card list in one call.
///
/// Returns the warnings when the catalog is acceptable.
pub fn validate_catalog(cards: &[Card]) -> Result<Vec<ValidationIssue>, CatalogError> {
    Validator::new().validate(cards).into_result()
}

/// Card catalog validator.
///
/// Stateless between runs: validating the same cards twice yields the same
/// issues in the same order.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every card and returns all issues found.
    pub fn validate(&mut self, cards: &[Card]) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (index, card) in cards.iter().enumerate() {
            if let Some(first) = first_seen.get(card.id.as_str()) {
                self.add_error(
                    &card.id,
                    "id",
                    format!("duplicate card id (first defined at index {first})"),
                );
            } else {
                first_seen.insert(&card.id, index);
            }

            self.validate_card(card);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Card Validation
    // ========================================================================

    fn validate_card(&mut self, card: &Card) {
        if card.id.trim().is_empty() {
            self.add_error(&card.id, "id", "card id is required");
        }
        if card.name.trim().is_empty() {
            self.add_error(&card.id, "name", "card name is required");
        }

        if let CardKind::Unit { stats, .. } = &card.kind {
            if stats.health <= 0 {
                self.add_error(&card.id, "stats.health", "must be a positive integer");
            }
            if stats.attack < 0 {
                self.add_error(&card.id, "stats.attack", "must be a non-negative integer");
            }
        }

        for (i, keyword) in card.keywords.iter().enumerate() {
            if card.keywords[..i].contains(keyword) {
                self.add_warning(
                    &card.id,
                    format!("keywords[{i}]"),
                    format!("duplicate keyword '{keyword}'"),
                );
            }
        }

        self.validate_specials(card);

        if !card.is_unit() && !card.triggers.is_empty() {
            self.add_warning(&card.id, "triggers", "triggers on a non-unit card never fire");
        }
        for (i, trigger) in card.triggers.iter().enumerate() {
            self.validate_trigger(&card.id, trigger, &format!("triggers[{i}]"));
        }
    }

    // ========================================================================
    // Special Validation
    // ========================================================================

    fn validate_specials(&mut self, card: &Card) {
        let mut taunts = 0;
        let mut resistances = 0;

        for (i, special) in card.specials.iter().enumerate() {
            let path = format!("specials[{i}]");
            match special {
                Special::Taunt => {
                    taunts += 1;
                    if taunts > 1 {
                        self.add_error(&card.id, &path, "at most one taunt special per card");
                    }
                    match card.lane() {
                        None => self.add_error(&card.id, &path, "taunt requires a unit card"),
                        Some(Lane::Front) => {}
                        Some(lane) => self.add_error(
                            &card.id,
                            &path,
                            format!("taunt requires lane front (found {lane})"),
                        ),
                    }
                }
                Special::ShieldOnSummon { amount } => {
                    if *amount <= 0 {
                        self.add_error(&card.id, format!("{path}.amount"), "must be a positive integer");
                    }
                }
                Special::Resistance { stun, exposed, atk_down } => {
                    resistances += 1;
                    if resistances > 1 {
                        self.add_error(&card.id, &path, "at most one resistance special per card");
                    }
                    for (field, value) in [("stun", stun), ("exposed", exposed), ("atkDown", atk_down)] {
                        if let Some(v) = value {
                            if !(0.0..=1.0).contains(v) {
                                self.add_error(
                                    &card.id,
                                    format!("{path}.{field}"),
                                    format!("resistance must be within 0..1 (got {v})"),
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    // ========================================================================
    // Trigger Validation
    // ========================================================================

    fn validate_trigger(&mut self, card_id: &str, trigger: &Trigger, path: &str) {
        let combat = trigger.when.is_combat();

        if trigger.actions.is_empty() {
            self.add_error(card_id, format!("{path}.actions"), "trigger must declare at least one action");
        }

        if !trigger.requires.is_empty() && !combat {
            self.add_error(
                card_id,
                format!("{path}.requires"),
                format!(
                    "conditions are only allowed on combat triggers (on_hit, on_kill, after_combat_survived), found {}",
                    trigger.when
                ),
            );
        }

        for (i, action) in trigger.actions.iter().enumerate() {
            self.validate_action(card_id, action, combat, &format!("{path}.actions[{i}]"));
        }
    }

    fn validate_action(&mut self, card_id: &str, action: &Action, combat: bool, path: &str) {
        match action.target() {
            Some(Target::HitTarget) if !combat => {
                self.add_error(
                    card_id,
                    format!("{path}.target"),
                    "hit_target is only valid in combat triggers",
                );
            }
            Some(Target::Leader) if !matches!(action, Action::Heal { .. }) => {
                self.add_error(
                    card_id,
                    format!("{path}.target"),
                    format!("leader is only valid for heal, not {}", action.kind().as_str()),
                );
            }
            _ => {}
        }

        match action {
            Action::GainShield { amount, .. }
            | Action::Heal { amount, .. }
            | Action::GainShares { amount }
            | Action::DrawCard { amount } => {
                if *amount <= 0 {
                    self.add_error(card_id, format!("{path}.amount"), "must be a positive integer");
                }
            }
            Action::ModifyAttack { amount, .. } => {
                if *amount == 0 {
                    self.add_error(card_id, format!("{path}.amount"), "must be a non-zero integer");
                }
            }
            Action::ApplyStatus { turns, .. } => {
                if *turns <= 0 {
                    self.add_error(card_id, format!("{path}.turns"), "must be a positive integer");
                }
            }
            Action::Cleanse { statuses, .. } => {
                if statuses.as_ref().is_some_and(|s| s.is_empty()) {
                    self.add_warning(
                        card_id,
                        format!("{path}.statuses"),
                        "empty status list cleanses every status; omit it instead",
                    );
                }
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, card_id: &str, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(issue(card_id, path, message, Severity::Error));
    }

    fn add_warning(&mut self, card_id: &str, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(issue(card_id, path, message, Severity::Warning));
    }
}

fn issue(
    card_id: &str,
    path: impl Into<String>,
    message: impl Into<String>,
    severity: Severity,
) -> ValidationIssue {
    ValidationIssue {
        card_id: card_id.to_string(),
        path: path.into(),
        message: message.into(),
        severity,
    }
}
