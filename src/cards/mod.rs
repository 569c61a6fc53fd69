//! Card model: cards, expansions, the registry and catalog snapshots.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identifier
//! - `CardType` / `SpecialCategory`: Printed types and the four special pools
//! - `Card`: Immutable card data (expansions, types, cost)
//! - `CardRegistry`: In-memory store serving the catalog
//! - `CardCatalog`: Snapshot of all pools, joined once per service

pub mod catalog;
pub mod definition;
pub mod expansion;
pub mod registry;

pub use catalog::{CardCatalog, CatalogProvider};
pub use definition::{Card, CardId, CardType, SpecialCategory};
pub use expansion::{Expansion, ExpansionId};
pub use registry::CardRegistry;
