//! # kingdom-randomizer
//!
//! Weighted random selection of kingdom and special cards for
//! Dominion-style deckbuilders.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Selection Out**: The engine combines a catalog, a
//!    configuration and (for replacements) the current selection, all
//!    passed explicitly. It holds no shared mutable state.
//!
//! 2. **Randomness Behind a Seam**: Every pick goes through a
//!    `DrawPrimitive`. The engine only decides *what* to draw from and
//!    with which weights.
//!
//! 3. **Explicit Dispatch**: Special categories are an enum with a fixed
//!    order (Event, Landmark, Project, Way); a card tagged with several
//!    goes to the first.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Cards, expansions, registry, catalog snapshots
//! - `draw`: Draw primitive and cost weighting
//! - `shuffle`: Selection engine, collaborators and the trigger service

pub mod core;
pub mod cards;
pub mod draw;
pub mod shuffle;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Configuration, CostDistribution, SpecialCardsCount,
    DrawRng, DrawRngState,
    CatalogError, ConfigError, DrawError, SelectionError,
};

pub use crate::cards::{
    Card, CardId, CardType, SpecialCategory,
    Expansion, ExpansionId,
    CardRegistry, CardCatalog, CatalogProvider,
};

pub use crate::draw::{DrawPrimitive, WeightedDraw, cost_weights};

pub use crate::shuffle::{
    Selection, KINGDOM_SIZE,
    SelectionEngine, Pool,
    ConfigurationProvider, SelectionHolder, SetHolder, SharedConfiguration,
    ShuffleService,
};
