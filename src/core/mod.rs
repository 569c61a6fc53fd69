//! Core types: RNG, configuration and errors.
//!
//! These are shared by the card model, the draw primitive and the
//! selection engine.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Configuration, CostDistribution, SpecialCardsCount};
pub use error::{
    CatalogError, ConfigError, DrawError, SelectionError, CheckpointError, UnknownCardType,
};
pub use rng::{DrawRng, DrawRngState};
