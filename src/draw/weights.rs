//! Cost-based draw weights.
//!
//! The configured weight of a cost tier is split evenly among the
//! candidates of that cost, so a tier's total share does not grow with
//! the number of cards printed at that cost.

use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::CostDistribution;

/// Weights for `candidates`, positionally aligned.
///
/// Returns `None` for an empty distribution, meaning a uniform draw.
/// Costs missing from a non-empty distribution weigh zero.
#[must_use]
pub fn cost_weights(candidates: &[Card], distribution: &CostDistribution) -> Option<Vec<f64>> {
    if distribution.is_empty() {
        return None;
    }

    let mut per_cost: FxHashMap<u32, usize> = FxHashMap::default();
    for card in candidates {
        *per_cost.entry(card.cost).or_insert(0) += 1;
    }

    let weights = candidates
        .iter()
        .map(|card| {
            let tier = distribution.get(card.cost).unwrap_or(0.0);
            // Every candidate counts itself, so the divisor is at least 1.
            tier / per_cost[&card.cost] as f64
        })
        .collect();
    Some(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn cards_with_costs(costs: &[u32]) -> Vec<Card> {
        costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| Card::new(CardId::new(i as u32), format!("Card {}", i), cost))
            .collect()
    }

    #[test]
    fn test_empty_distribution_is_uniform() {
        let cards = cards_with_costs(&[2, 3, 4]);
        assert_eq!(cost_weights(&cards, &CostDistribution::new()), None);
    }

    #[test]
    fn test_weight_split_among_equal_costs() {
        let cards = cards_with_costs(&[4, 5, 5]);
        let dist = CostDistribution::new().with_weight(4, 1.0).with_weight(5, 2.0);

        assert_eq!(cost_weights(&cards, &dist), Some(vec![1.0 / 1.0, 2.0 / 2.0, 2.0 / 2.0]));
    }

    #[test]
    fn test_missing_cost_weighs_zero() {
        let cards = cards_with_costs(&[4, 5, 5, 6]);
        let dist = CostDistribution::new().with_weight(4, 1.0).with_weight(5, 2.0);

        assert_eq!(cost_weights(&cards, &dist), Some(vec![1.0, 1.0, 1.0, 0.0]));
    }

    #[test]
    fn test_uneven_split() {
        let cards = cards_with_costs(&[3, 3, 3, 2]);
        let dist = CostDistribution::new().with_weight(3, 1.5).with_weight(2, 0.5);

        assert_eq!(cost_weights(&cards, &dist), Some(vec![0.5, 0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_no_candidates() {
        let dist = CostDistribution::new().with_weight(4, 1.0);
        assert_eq!(cost_weights(&[], &dist), Some(vec![]));
    }
}
