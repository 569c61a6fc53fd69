//! Shuffling: the selection engine and its trigger service.
//!
//! ## Key Types
//!
//! - `Selection`: ten kingdom cards plus the flat special-card list
//! - `SelectionEngine`: filtering, weighting and dispatch over snapshots
//! - `ShuffleService`: reshuffle / replace triggers wired to collaborators
//! - `ConfigurationProvider`, `SelectionHolder`: collaborator seams

pub mod engine;
pub mod providers;
pub mod service;
pub mod set;

pub use engine::{exclude_cards, filter_by_expansions, Pool, SelectionEngine};
pub use providers::{ConfigurationProvider, SelectionHolder, SetHolder, SharedConfiguration};
pub use service::ShuffleService;
pub use set::{Selection, KINGDOM_SIZE};
