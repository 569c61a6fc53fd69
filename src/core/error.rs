//! Error types for drawing, configuration and catalog retrieval.
//!
//! The selection engine does not validate its inputs. Failures come from
//! the draw primitive (too few candidates) or from the catalog provider,
//! and are propagated unchanged to whoever triggered the shuffle.

use thiserror::Error;

use crate::cards::SpecialCategory;

/// Failure of the weighted draw primitive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// More items were requested than can be drawn.
    ///
    /// When weights are supplied, only positive-weight items count as
    /// available.
    #[error("requested {requested} cards but only {available} can be drawn")]
    InsufficientCandidates { requested: usize, available: usize },

    /// The weight slice is not positionally aligned with the items.
    #[error("got {weights} weights for {items} items")]
    WeightCountMismatch { items: usize, weights: usize },

    /// A weight is negative, NaN or infinite.
    #[error("invalid weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },
}

/// Invalid user configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cost {cost} has invalid weight {weight}")]
    InvalidWeight { cost: u32, weight: f64 },

    #[error("no expansions enabled")]
    NoExpansions,
}

/// Failure of a catalog provider to supply a card list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("kingdom cards unavailable: {0}")]
    KingdomUnavailable(String),

    #[error("{category} cards unavailable: {reason}")]
    CategoryUnavailable {
        category: SpecialCategory,
        reason: String,
    },
}

/// Error raised by a shuffle trigger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Failure encoding or decoding a serialized RNG checkpoint.
#[derive(Debug, Error)]
#[error("invalid rng checkpoint: {0}")]
pub struct CheckpointError(#[from] pub bincode::Error);

/// A card type name that does not match any [`crate::cards::CardType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card type `{0}`")]
pub struct UnknownCardType(pub String);
