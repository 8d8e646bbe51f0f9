//! Error types.
//!
//! Only catalog loading can fail. Everything that goes wrong while a trigger
//! runs (a missing target, a full-health ally, an empty deck) is a no-op,
//! not an error, so the runtime has no error type of its own.

use thiserror::Error;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Rejects the catalog.
    Error,
    /// Reported but does not prevent loading.
    Warning,
}

/// One problem found in a card definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationIssue {
    /// Id of the offending card (may be empty if the id itself is missing).
    pub card_id: String,
    /// Path to the field inside the card, e.g. `triggers[0].actions[1].amount`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Severity level of the issue.
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.card_id, self.path, self.message)
    }
}

/// Failure to build a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be decoded.
    #[error("failed to parse card catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// One or more cards violate DSL invariants.
    #[error("card catalog failed validation with {} issue(s):\n{}", .issues.len(), format_issues(.issues))]
    Invalid {
        /// Every error found, in catalog order.
        issues: Vec<ValidationIssue>,
    },
}

impl CatalogError {
    /// Validation issues carried by this error, if any.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            CatalogError::Invalid { issues } => issues,
            CatalogError::Parse(_) => &[],
        }
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
