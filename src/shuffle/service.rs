//! Shuffle triggers.
//!
//! `ShuffleService` wires the selection engine to its collaborators. The
//! catalog is joined once, when the service is built. Configuration and
//! the current selection are read fresh on every trigger, so each trigger
//! sees the latest published values. Results are both published to the
//! holder and returned to the caller.

use tracing::{debug, warn};

use super::engine::SelectionEngine;
use super::providers::{ConfigurationProvider, SelectionHolder};
use super::set::Selection;
use crate::cards::{Card, CardCatalog, CatalogProvider};
use crate::core::{DrawRngState, SelectionError};
use crate::draw::{DrawPrimitive, WeightedDraw};

/// Reshuffle and single-card replacement entry points.
///
/// ## Example
///
/// ```
/// use kingdom_randomizer::cards::{Card, CardId, CardRegistry, ExpansionId};
/// use kingdom_randomizer::core::Configuration;
/// use kingdom_randomizer::draw::WeightedDraw;
/// use kingdom_randomizer::shuffle::{SetHolder, ShuffleService};
///
/// let base = ExpansionId::new(1);
/// let registry: CardRegistry = (0..15)
///     .map(|i| Card::new(CardId::new(i), format!("Card {}", i), 3).with_expansion(base).kingdom())
///     .collect();
///
/// let mut service = ShuffleService::new(
///     &registry,
///     Configuration::new().with_expansion(base),
///     SetHolder::new(),
///     WeightedDraw::seeded(7),
/// )
/// .unwrap();
///
/// let set = service.shuffle_set().unwrap();
/// let (old, new) = service.shuffle_single_card(&set.kingdom_cards[0]).unwrap();
/// assert_ne!(old.id, new.id);
/// assert!(service.holder().selection().contains(new.id));
/// ```
#[derive(Debug)]
pub struct ShuffleService<C, H, D> {
    catalog: CardCatalog,
    configuration: C,
    holder: H,
    engine: SelectionEngine<D>,
}

impl<C, H, D> ShuffleService<C, H, D>
where
    C: ConfigurationProvider,
    H: SelectionHolder,
    D: DrawPrimitive,
{
    /// Build a service, joining the catalog from `catalog_provider`.
    ///
    /// Fails if any of the five catalog pools cannot be retrieved.
    pub fn new(
        catalog_provider: &impl CatalogProvider,
        configuration: C,
        holder: H,
        draw: D,
    ) -> Result<Self, SelectionError> {
        let catalog = CardCatalog::load(catalog_provider)?;
        Ok(Self::with_catalog(catalog, configuration, holder, draw))
    }

    /// Build a service around an already joined catalog.
    #[must_use]
    pub fn with_catalog(catalog: CardCatalog, configuration: C, holder: H, draw: D) -> Self {
        Self {
            catalog,
            configuration,
            holder,
            engine: SelectionEngine::new(draw),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn holder(&self) -> &H {
        &self.holder
    }

    #[must_use]
    pub fn engine(&self) -> &SelectionEngine<D> {
        &self.engine
    }

    /// Draw a whole new selection and publish it.
    pub fn shuffle_set(&mut self) -> Result<Selection, SelectionError> {
        let configuration = self.configuration.configuration();
        let selection = self.engine.produce_set(&self.catalog, &configuration)?;
        debug!(
            kingdom = selection.kingdom_cards.len(),
            special = selection.special_cards.len(),
            "publishing new selection"
        );
        self.holder.update_set(selection.clone());
        Ok(selection)
    }

    /// Replace `card` in the current selection and publish the swap.
    ///
    /// Returns the `(old, new)` pair.
    pub fn shuffle_single_card(&mut self, card: &Card) -> Result<(Card, Card), SelectionError> {
        let configuration = self.configuration.configuration();
        let current = self.holder.current();
        let (old, new) =
            self.engine
                .produce_replacement(card, &self.catalog, &configuration, &current)?;

        if !self.holder.update_single_card(&old, new.clone()) {
            warn!(card = %old.id, "replaced card is no longer in the selection");
        }
        Ok((old, new))
    }
}

impl<C, H> ShuffleService<C, H, WeightedDraw>
where
    C: ConfigurationProvider,
    H: SelectionHolder,
{
    /// Capture the draw RNG so the following shuffles can be replayed.
    #[must_use]
    pub fn checkpoint(&self) -> DrawRngState {
        self.engine.draw().checkpoint()
    }

    /// Rewind the draw RNG to `state`. The held selection is untouched.
    pub fn restore(&mut self, state: &DrawRngState) {
        debug!(seed = state.seed, "restoring draw rng");
        self.engine.draw_mut().restore(state);
    }
}
