//! Property tests over generated catalogs and configurations.

use std::collections::HashSet;

use proptest::prelude::*;

use kingdom_randomizer::cards::{Card, CardCatalog, CardId, CardType, ExpansionId, SpecialCategory};
use kingdom_randomizer::core::{Configuration, CostDistribution, DrawError, SelectionError};
use kingdom_randomizer::draw::{cost_weights, WeightedDraw};
use kingdom_randomizer::shuffle::{Pool, SelectionEngine, KINGDOM_SIZE};

/// Expansion 0 is always enabled and always holds enough cards for a
/// complete selection.
const CORE: ExpansionId = ExpansionId::new(0);
const MAX_SPECIAL: usize = 3;

fn category_type(index: usize) -> CardType {
    SpecialCategory::ALL[index].card_type()
}

/// `(expansion, cost)` pairs; the first `guaranteed` sit in `CORE`.
fn arb_pool(guaranteed: usize, size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..4, 0u32..9), size).prop_map(move |mut cards| {
        for card in cards.iter_mut().take(guaranteed) {
            card.0 = CORE.raw();
        }
        cards
    })
}

fn build(first_id: u32, card_type: CardType, raw: &[(u32, u32)]) -> Vec<Card> {
    raw.iter()
        .enumerate()
        .map(|(i, &(expansion, cost))| {
            let card = Card::new(CardId::new(first_id + i as u32), format!("{:?} {}", card_type, i), cost)
                .with_expansion(ExpansionId::new(expansion))
                .with_type(card_type);
            if card_type.special_category().is_none() {
                card.kingdom()
            } else {
                card
            }
        })
        .collect()
}

fn arb_catalog() -> impl Strategy<Value = CardCatalog> {
    (
        arb_pool(KINGDOM_SIZE, KINGDOM_SIZE..40),
        prop::collection::vec(arb_pool(MAX_SPECIAL, MAX_SPECIAL..10), 4),
    )
        .prop_map(|(kingdom, specials)| {
            let mut catalog = CardCatalog::new().with_kingdom_cards(build(0, CardType::Action, &kingdom));
            for (index, raw) in specials.iter().enumerate() {
                let first_id = 1000 * (index as u32 + 1);
                catalog = catalog.with_category(
                    SpecialCategory::ALL[index],
                    build(first_id, category_type(index), raw),
                );
            }
            catalog
        })
}

fn arb_configuration() -> impl Strategy<Value = Configuration> {
    (
        prop::collection::vec(any::<bool>(), 3),
        prop::collection::vec(0..=MAX_SPECIAL, 4),
        // Every generated cost gets a positive weight when a table is used.
        prop::option::of(prop::collection::vec(0.1f64..5.0, 9)),
    )
        .prop_map(|(enabled, counts, weights)| {
            let mut config = Configuration::new().with_expansion(CORE);
            for (i, on) in enabled.into_iter().enumerate() {
                if on {
                    config = config.with_expansion(ExpansionId::new(i as u32 + 1));
                }
            }
            for (category, count) in SpecialCategory::ALL.into_iter().zip(counts) {
                config = config.with_special_count(category, count);
            }
            if let Some(weights) = weights {
                let distribution: CostDistribution =
                    weights.into_iter().enumerate().map(|(cost, w)| (cost as u32, w)).collect();
                config = config.with_cost_distribution(distribution);
            }
            config
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn selection_is_complete_and_valid(
        catalog in arb_catalog(),
        config in arb_configuration(),
        seed in any::<u64>(),
    ) {
        let set = SelectionEngine::new(WeightedDraw::seeded(seed))
            .produce_set(&catalog, &config)
            .unwrap();

        prop_assert_eq!(set.kingdom_cards.len(), KINGDOM_SIZE);
        prop_assert_eq!(set.special_cards.len(), config.special_cards_count.total());

        let ids: HashSet<_> = set.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), set.len());

        for card in set.iter() {
            prop_assert!(card.in_any_expansion(&config.expansions));
        }
        for card in set.kingdom_cards.iter() {
            prop_assert!(card.is_randomizable_kingdom_card());
        }

        // Specials come grouped in category order.
        let mut expected = Vec::new();
        for category in SpecialCategory::ALL {
            expected.extend(std::iter::repeat(category).take(config.special_cards_count.get(category)));
        }
        let actual: Vec<_> = set.special_cards.iter().filter_map(Card::special_category).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn replacement_comes_from_same_pool(
        catalog in arb_catalog(),
        config in arb_configuration(),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut engine = SelectionEngine::new(WeightedDraw::seeded(seed));
        let set = engine.produce_set(&catalog, &config).unwrap();
        let cards: Vec<&Card> = set.iter().collect();
        let old = (*pick.get(&cards)).clone();
        let pool = Pool::for_card(&old);

        let on_board: HashSet<_> = set.iter().map(|c| c.id).collect();
        let remaining = pool
            .cards(&catalog)
            .iter()
            .filter(|c| c.in_any_expansion(&config.expansions) && !on_board.contains(&c.id))
            .count();

        match engine.produce_replacement(&old, &catalog, &config, &set) {
            Ok((returned, new)) => {
                prop_assert_eq!(returned.id, old.id);
                prop_assert_ne!(new.id, old.id);
                prop_assert!(!on_board.contains(&new.id));
                prop_assert!(new.in_any_expansion(&config.expansions));
                prop_assert_eq!(Pool::for_card(&new), pool);
            }
            Err(err) => {
                prop_assert_eq!(remaining, 0);
                prop_assert_eq!(
                    err,
                    SelectionError::Draw(DrawError::InsufficientCandidates { requested: 1, available: 0 })
                );
            }
        }
    }

    #[test]
    fn cost_tiers_keep_their_configured_share(
        costs in prop::collection::vec(0u32..6, 1..30),
        weights in prop::collection::vec(0.0f64..4.0, 4),
    ) {
        let cards: Vec<Card> = costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| Card::new(CardId::new(i as u32), "Card", cost))
            .collect();
        // Costs 4 and 5 are deliberately left out of the table.
        let distribution: CostDistribution =
            weights.iter().enumerate().map(|(cost, &w)| (cost as u32, w)).collect();

        let computed = cost_weights(&cards, &distribution).unwrap();
        prop_assert_eq!(computed.len(), cards.len());

        for cost in 0u32..6 {
            let share: f64 = cards
                .iter()
                .zip(&computed)
                .filter(|(card, _)| card.cost == cost)
                .map(|(_, w)| *w)
                .sum();
            let present = cards.iter().any(|c| c.cost == cost);
            let expected = if present { distribution.get(cost).unwrap_or(0.0) } else { 0.0 };
            prop_assert!((share - expected).abs() < 1e-9, "cost {}: {} != {}", cost, share, expected);
        }
    }
}
