//! Catalog snapshot: every drawable card, partitioned by pool.
//!
//! The snapshot is joined once from a [`CatalogProvider`] and then shared by
//! every shuffle. Pools are `im::Vector`s, so cloning the catalog is O(1).

use im::Vector;
use tracing::debug;

use super::definition::{Card, SpecialCategory};
use crate::core::CatalogError;

/// Source of the card catalog.
///
/// Each method is a one-shot retrieval. Failures propagate to whoever
/// builds the [`CardCatalog`].
pub trait CatalogProvider {
    /// All cards eligible for the ten kingdom slots.
    fn find_randomizable_kingdom_cards(&self) -> Result<Vec<Card>, CatalogError>;

    /// All cards of one special category.
    fn find_by_category(&self, category: SpecialCategory) -> Result<Vec<Card>, CatalogError>;
}

/// Full card lists per pool.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardCatalog {
    pub kingdom_cards: Vector<Card>,
    pub events: Vector<Card>,
    pub landmarks: Vector<Card>,
    pub projects: Vector<Card>,
    pub ways: Vector<Card>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the five pools from a provider.
    ///
    /// Fails on the first pool the provider cannot supply.
    pub fn load(provider: &impl CatalogProvider) -> Result<Self, CatalogError> {
        let catalog = Self {
            kingdom_cards: provider.find_randomizable_kingdom_cards()?.into(),
            events: provider.find_by_category(SpecialCategory::Event)?.into(),
            landmarks: provider.find_by_category(SpecialCategory::Landmark)?.into(),
            projects: provider.find_by_category(SpecialCategory::Project)?.into(),
            ways: provider.find_by_category(SpecialCategory::Way)?.into(),
        };
        debug!(
            kingdom = catalog.kingdom_cards.len(),
            events = catalog.events.len(),
            landmarks = catalog.landmarks.len(),
            projects = catalog.projects.len(),
            ways = catalog.ways.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Set the kingdom pool (builder pattern).
    #[must_use]
    pub fn with_kingdom_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.kingdom_cards = cards.into_iter().collect();
        self
    }

    /// Set one special pool (builder pattern).
    #[must_use]
    pub fn with_category(
        mut self,
        category: SpecialCategory,
        cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        *self.category_mut(category) = cards.into_iter().collect();
        self
    }

    /// Full list of a special category.
    #[must_use]
    pub fn category(&self, category: SpecialCategory) -> &Vector<Card> {
        match category {
            SpecialCategory::Event => &self.events,
            SpecialCategory::Landmark => &self.landmarks,
            SpecialCategory::Project => &self.projects,
            SpecialCategory::Way => &self.ways,
        }
    }

    fn category_mut(&mut self, category: SpecialCategory) -> &mut Vector<Card> {
        match category {
            SpecialCategory::Event => &mut self.events,
            SpecialCategory::Landmark => &mut self.landmarks,
            SpecialCategory::Project => &mut self.projects,
            SpecialCategory::Way => &mut self.ways,
        }
    }

    /// Total number of cards over all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kingdom_cards.len()
            + SpecialCategory::ALL
                .iter()
                .map(|&c| self.category(c).len())
                .sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
