//! Card catalog for definition lookup.
//!
//! The `Catalog` holds every authored card. It is built once at startup,
//! validated eagerly, and then only read. Construction is the single place
//! a malformed card can be rejected; after that the runtime trusts the data.

use rustc_hash::FxHashMap;

use crate::error::{CatalogError, ValidationIssue};
use crate::validate::validate_catalog;

use super::definition::Card;

/// Validated, immutable card catalog.
///
/// ## Example
///
/// ```
/// use battler_rules::cards::{Card, Catalog};
/// use battler_rules::core::Lane;
///
/// let catalog = Catalog::new(vec![
///     Card::unit("bailiff", "Bailiff", Lane::Front, 2, 5),
/// ]).unwrap();
///
/// assert_eq!(catalog.get("bailiff").unwrap().name, "Bailiff");
/// assert!(catalog.get("nobody").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
    warnings: Vec<ValidationIssue>,
}

impl Catalog {
    /// Validate `cards` and build the catalog.
    ///
    /// Fails with every error found across the whole card list.
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let warnings = validate_catalog(&cards)?;
        for warning in &warnings {
            tracing::warn!(card = %warning.card_id, path = %warning.path, "{}", warning.message);
        }

        let index = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id.clone(), i))
            .collect();

        tracing::info!(cards = cards.len(), warnings = warnings.len(), "card catalog loaded");

        Ok(Self {
            cards,
            index,
            warnings,
        })
    }

    /// Parse a JSON array of cards, then validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Get a card by id, only if it is a unit card.
    #[must_use]
    pub fn get_unit(&self, id: &str) -> Option<&Card> {
        self.get(id).filter(|card| card.is_unit())
    }

    /// Check if a card id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Non-fatal issues found while loading.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Special;
    use crate::core::Lane;

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![
            Card::unit("bailiff", "Bailiff", Lane::Front, 2, 5),
            Card::non_unit("hush_money", "Hush Money"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("hush_money"));
        assert!(catalog.get_unit("bailiff").is_some());
        assert!(catalog.get_unit("hush_money").is_none());
        assert!(catalog.get("nobody").is_none());
    }

    #[test]
    fn test_iteration_keeps_authored_order() {
        let catalog = Catalog::new(vec![
            Card::non_unit("b", "B"),
            Card::non_unit("a", "A"),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(vec![
            Card::non_unit("dup", "A"),
            Card::non_unit("dup", "B"),
        ])
        .unwrap_err();

        assert_eq!(err.issues().len(), 1);
        assert!(err.to_string().contains("[dup]"));
    }

    #[test]
    fn test_invalid_card_rejected() {
        let err = Catalog::new(vec![
            Card::unit("wall", "Wall", Lane::Back, 0, 4).with_special(Special::Taunt),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::Invalid { .. }));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = Catalog::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.warnings().is_empty());
    }
}
