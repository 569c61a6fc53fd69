//! In-memory card registry.
//!
//! The `CardRegistry` stores every known card and expansion and serves
//! them as a [`CatalogProvider`]. Lists are returned in card-id order so
//! seeded draws are reproducible.

use rustc_hash::FxHashMap;

use super::catalog::CatalogProvider;
use super::definition::{Card, CardId, SpecialCategory};
use super::expansion::{Expansion, ExpansionId};
use crate::core::CatalogError;

/// Registry of cards and expansions.
///
/// ## Example
///
/// ```
/// use kingdom_randomizer::cards::{Card, CardId, CardRegistry, ExpansionId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Village", 3).with_expansion(ExpansionId::new(1)));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Village");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    expansions: FxHashMap<ExpansionId, Expansion>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register an expansion, replacing any previous one with the same ID.
    pub fn register_expansion(&mut self, expansion: Expansion) {
        self.expansions.insert(expansion.id, expansion);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get an expansion by ID.
    #[must_use]
    pub fn expansion(&self, id: ExpansionId) -> Option<&Expansion> {
        self.expansions.get(&id)
    }

    /// All expansions, ordered by ID.
    #[must_use]
    pub fn expansions(&self) -> Vec<&Expansion> {
        let mut expansions: Vec<_> = self.expansions.values().collect();
        expansions.sort_by_key(|e| e.id);
        expansions
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards matching a predicate, ordered by ID.
    pub fn find<F>(&self, predicate: F) -> Vec<Card>
    where
        F: Fn(&Card) -> bool,
    {
        let mut found: Vec<Card> = self.cards.values().filter(|c| predicate(c)).cloned().collect();
        found.sort_by_key(|c| c.id);
        found
    }
}

impl CatalogProvider for CardRegistry {
    fn find_randomizable_kingdom_cards(&self) -> Result<Vec<Card>, CatalogError> {
        Ok(self.find(Card::is_randomizable_kingdom_card))
    }

    /// Cards dispatched to `category`. A card tagged with several special
    /// categories is listed under the first one only.
    fn find_by_category(&self, category: SpecialCategory) -> Result<Vec<Card>, CatalogError> {
        Ok(self.find(|c| c.special_category() == Some(category)))
    }
}

impl FromIterator<Card> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
