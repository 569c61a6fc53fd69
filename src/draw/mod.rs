//! Draw primitive and cost weighting.
//!
//! - `primitive`: the [`DrawPrimitive`] contract and its RNG-backed
//!   implementation [`WeightedDraw`]
//! - `weights`: per-candidate weights from a cost distribution

pub mod primitive;
pub mod weights;

pub use primitive::{DrawPrimitive, WeightedDraw};
pub use weights::cost_weights;
