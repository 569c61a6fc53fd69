//! Randomizer configuration.
//!
//! A `Configuration` combines:
//! - the enabled expansions (only their cards are eligible),
//! - `SpecialCardsCount`: how many cards to draw per special category,
//! - `CostDistribution`: an optional cost → weight table biasing kingdom
//!   and special draws toward certain cost tiers.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{ExpansionId, SpecialCategory};

/// Number of cards drawn per special category. Zero skips the category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCardsCount {
    pub events: usize,
    pub landmarks: usize,
    pub projects: usize,
    pub ways: usize,
}

impl SpecialCardsCount {
    /// Count for one category.
    #[must_use]
    pub const fn get(&self, category: SpecialCategory) -> usize {
        match category {
            SpecialCategory::Event => self.events,
            SpecialCategory::Landmark => self.landmarks,
            SpecialCategory::Project => self.projects,
            SpecialCategory::Way => self.ways,
        }
    }

    /// Set the count for one category.
    pub fn set(&mut self, category: SpecialCategory, count: usize) {
        match category {
            SpecialCategory::Event => self.events = count,
            SpecialCategory::Landmark => self.landmarks = count,
            SpecialCategory::Project => self.projects = count,
            SpecialCategory::Way => self.ways = count,
        }
    }

    /// Sum over all categories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.events + self.landmarks + self.projects + self.ways
    }
}

/// Relative draw weight per card cost.
///
/// An empty table means uniform draws. Otherwise costs without an entry
/// weigh zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostDistribution(FxHashMap<u32, f64>);

impl CostDistribution {
    /// Create an empty (uniform) distribution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cost tier (builder pattern).
    #[must_use]
    pub fn with_weight(mut self, cost: u32, weight: f64) -> Self {
        self.0.insert(cost, weight);
        self
    }

    /// Configured weight for a cost, if any.
    #[must_use]
    pub fn get(&self, cost: u32) -> Option<f64> {
        self.0.get(&cost).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&cost, &weight)| (cost, weight))
    }
}

impl FromIterator<(u32, f64)> for CostDistribution {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// User settings read at every shuffle.
///
/// ## Example
///
/// ```
/// use kingdom_randomizer::cards::{ExpansionId, SpecialCategory};
/// use kingdom_randomizer::core::{Configuration, CostDistribution};
///
/// let config = Configuration::new()
///     .with_expansion(ExpansionId::new(1))
///     .with_special_count(SpecialCategory::Event, 2)
///     .with_cost_distribution(CostDistribution::new().with_weight(4, 1.0));
///
/// assert!(config.is_enabled(ExpansionId::new(1)));
/// assert_eq!(config.special_cards_count.events, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Expansions whose cards may be drawn.
    pub expansions: FxHashSet<ExpansionId>,

    /// Desired count per special category.
    #[serde(default)]
    pub special_cards_count: SpecialCardsCount,

    /// Optional cost weighting.
    #[serde(default)]
    pub cost_distribution: CostDistribution,
}

impl Configuration {
    /// Create an empty configuration (no expansions, no special cards).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable an expansion.
    #[must_use]
    pub fn with_expansion(mut self, expansion: ExpansionId) -> Self {
        self.expansions.insert(expansion);
        self
    }

    /// Enable several expansions.
    #[must_use]
    pub fn with_expansions(mut self, expansions: impl IntoIterator<Item = ExpansionId>) -> Self {
        self.expansions.extend(expansions);
        self
    }

    /// Set the draw count of a special category.
    #[must_use]
    pub fn with_special_count(mut self, category: SpecialCategory, count: usize) -> Self {
        self.special_cards_count.set(category, count);
        self
    }

    /// Set the cost weighting table.
    #[must_use]
    pub fn with_cost_distribution(mut self, distribution: CostDistribution) -> Self {
        self.cost_distribution = distribution;
        self
    }

    /// Whether cards of this expansion are eligible.
    #[must_use]
    pub fn is_enabled(&self, expansion: ExpansionId) -> bool {
        self.expansions.contains(&expansion)
    }

    /// Check the configuration for values the randomizer cannot use.
    ///
    /// The selection engine itself never calls this; callers validate
    /// user input before publishing it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expansions.is_empty() {
            return Err(ConfigError::NoExpansions);
        }
        for (cost, weight) in self.cost_distribution.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight { cost, weight });
            }
        }
        Ok(())
    }
}
