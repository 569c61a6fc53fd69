//! Selection engine: candidate filtering, weighting and category dispatch.
//!
//! The engine is a pure transformation over snapshots. It owns no state
//! beyond its draw primitive:
//!
//! 1. Filter a pool to cards of enabled expansions
//! 2. Exclude cards already on the board or drawn earlier in the reshuffle
//! 3. Compute cost weights
//! 4. Delegate the random pick to the [`DrawPrimitive`]

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::set::{Selection, KINGDOM_SIZE};
use crate::cards::{Card, CardCatalog, CardId, SpecialCategory};
use crate::core::{Configuration, DrawError, SelectionError};
use crate::draw::{cost_weights, DrawPrimitive};

/// Catalog pool a card is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pool {
    Kingdom,
    Special(SpecialCategory),
}

impl Pool {
    /// Pool a replacement for `card` is drawn from.
    ///
    /// Cards tagged with several special categories go to the first one in
    /// Event, Landmark, Project, Way order.
    #[must_use]
    pub fn for_card(card: &Card) -> Self {
        let mut categories = card.special_categories();
        match categories.next() {
            Some(category) => {
                if let Some(ignored) = categories.next() {
                    warn!(
                        card = %card.id,
                        %category,
                        %ignored,
                        "card carries several special categories, using the first"
                    );
                }
                Pool::Special(category)
            }
            None => Pool::Kingdom,
        }
    }

    /// Full card list of this pool.
    #[must_use]
    pub fn cards(self, catalog: &CardCatalog) -> &Vector<Card> {
        match self {
            Pool::Kingdom => &catalog.kingdom_cards,
            Pool::Special(category) => catalog.category(category),
        }
    }
}

/// Cards of `cards` that belong to at least one enabled expansion.
#[must_use]
pub fn filter_by_expansions(cards: &Vector<Card>, configuration: &Configuration) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| c.in_any_expansion(&configuration.expansions))
        .cloned()
        .collect()
}

/// `cards` without any card whose ID is in `ignore`.
#[must_use]
pub fn exclude_cards(cards: Vec<Card>, ignore: &FxHashSet<CardId>) -> Vec<Card> {
    cards.into_iter().filter(|c| !ignore.contains(&c.id)).collect()
}

/// Produces selections and single-card replacements.
///
/// ## Example
///
/// ```
/// use kingdom_randomizer::cards::{Card, CardCatalog, CardId, ExpansionId};
/// use kingdom_randomizer::core::Configuration;
/// use kingdom_randomizer::draw::WeightedDraw;
/// use kingdom_randomizer::shuffle::SelectionEngine;
///
/// let base = ExpansionId::new(1);
/// let catalog = CardCatalog::new().with_kingdom_cards(
///     (0..12).map(|i| Card::new(CardId::new(i), format!("Card {}", i), 3).with_expansion(base).kingdom()),
/// );
/// let config = Configuration::new().with_expansion(base);
///
/// let mut engine = SelectionEngine::new(WeightedDraw::seeded(42));
/// let set = engine.produce_set(&catalog, &config).unwrap();
/// assert_eq!(set.kingdom_cards.len(), 10);
/// assert!(set.special_cards.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionEngine<D> {
    draw: D,
}

impl<D: DrawPrimitive> SelectionEngine<D> {
    #[must_use]
    pub fn new(draw: D) -> Self {
        Self { draw }
    }

    /// The draw primitive.
    #[must_use]
    pub fn draw(&self) -> &D {
        &self.draw
    }

    pub fn draw_mut(&mut self) -> &mut D {
        &mut self.draw
    }

    /// Draw a full selection: ten kingdom cards plus the configured number
    /// of cards per special category.
    ///
    /// Pools are drawn kingdom first, then in category order. A card listed
    /// in several pools is only eligible until it has been drawn once.
    pub fn produce_set(
        &mut self,
        catalog: &CardCatalog,
        configuration: &Configuration,
    ) -> Result<Selection, SelectionError> {
        let kingdom = filter_by_expansions(&catalog.kingdom_cards, configuration);
        let kingdom_cards = self.pick(kingdom, KINGDOM_SIZE, configuration)?;
        debug!(count = kingdom_cards.len(), "kingdom cards drawn");

        let mut drawn: FxHashSet<CardId> = kingdom_cards.iter().map(|c| c.id).collect();
        let mut special_cards = Vector::new();
        for category in SpecialCategory::ALL {
            let count = configuration.special_cards_count.get(category);
            if count == 0 {
                continue;
            }
            let candidates = exclude_cards(
                filter_by_expansions(catalog.category(category), configuration),
                &drawn,
            );
            let picked = self.pick(candidates, count, configuration)?;
            debug!(%category, count = picked.len(), "special cards drawn");
            drawn.extend(picked.iter().map(|c| c.id));
            special_cards.extend(picked);
        }

        Ok(Selection::new(kingdom_cards.into(), special_cards))
    }

    /// Draw a substitute for `old_card`.
    ///
    /// The substitute comes from the same pool as `old_card`, belongs to an
    /// enabled expansion and is not already anywhere in `current`. For cards
    /// listed in one pool only, that is exactly the old card's slot group.
    /// Returns `(old_card, new_card)`; the caller applies the swap.
    pub fn produce_replacement(
        &mut self,
        old_card: &Card,
        catalog: &CardCatalog,
        configuration: &Configuration,
        current: &Selection,
    ) -> Result<(Card, Card), SelectionError> {
        let pool = Pool::for_card(old_card);

        let mut ignore: FxHashSet<CardId> = current.iter().map(|c| c.id).collect();
        ignore.insert(old_card.id);

        let candidates = exclude_cards(
            filter_by_expansions(pool.cards(catalog), configuration),
            &ignore,
        );
        debug!(card = %old_card.id, ?pool, candidates = candidates.len(), "drawing replacement");

        let new_card = self
            .pick(candidates, 1, configuration)?
            .into_iter()
            .next()
            .ok_or(DrawError::InsufficientCandidates {
                requested: 1,
                available: 0,
            })?;
        debug!(old = %old_card.id, new = %new_card.id, "replacement drawn");

        Ok((old_card.clone(), new_card))
    }

    fn pick(
        &mut self,
        candidates: Vec<Card>,
        count: usize,
        configuration: &Configuration,
    ) -> Result<Vec<Card>, SelectionError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let weights = cost_weights(&candidates, &configuration.cost_distribution);
        Ok(self.draw.draw(&candidates, count, weights.as_deref())?)
    }
}
