//! Shuffle service tests: triggers, latest-value snapshots and publishing.

use std::collections::HashSet;

use kingdom_randomizer::cards::{Card, CardId, CardRegistry, CardType, Expansion, ExpansionId, SpecialCategory};
use kingdom_randomizer::core::{Configuration, CostDistribution, DrawError, SelectionError};
use kingdom_randomizer::draw::WeightedDraw;
use kingdom_randomizer::shuffle::{
    Selection, SelectionHolder, SetHolder, SharedConfiguration, ShuffleService,
};

const BASE: ExpansionId = ExpansionId::new(1);
const EMPIRES: ExpansionId = ExpansionId::new(2);
const RENAISSANCE: ExpansionId = ExpansionId::new(3);

/// 15 Base and 15 Empires kingdom cards, plus events and landmarks from
/// Empires and projects from Renaissance.
fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry.register_expansion(Expansion::new(BASE, "Base"));
    registry.register_expansion(Expansion::new(EMPIRES, "Empires"));
    registry.register_expansion(Expansion::new(RENAISSANCE, "Renaissance"));

    for i in 0..30 {
        let expansion = if i < 15 { BASE } else { EMPIRES };
        registry.register(
            Card::new(CardId::new(i), format!("Kingdom {}", i), 2 + i % 5)
                .with_expansion(expansion)
                .with_type(CardType::Action)
                .kingdom(),
        );
    }
    // Bottom half of a split pile never counts as a kingdom card.
    registry.register(
        Card::new(CardId::new(30), "Plunder", 5)
            .with_expansion(BASE)
            .kingdom()
            .in_split_pile(false),
    );
    for i in 0..6 {
        registry.register(
            Card::new(CardId::new(100 + i), format!("Event {}", i), i)
                .with_expansion(EMPIRES)
                .with_type(CardType::Event),
        );
        registry.register(
            Card::new(CardId::new(200 + i), format!("Landmark {}", i), 0)
                .with_expansion(EMPIRES)
                .with_type(CardType::Landmark),
        );
        registry.register(
            Card::new(CardId::new(300 + i), format!("Project {}", i), 3 + i)
                .with_expansion(RENAISSANCE)
                .with_type(CardType::Project),
        );
    }
    registry
}

fn service(
    configuration: Configuration,
    seed: u64,
) -> ShuffleService<SharedConfiguration, SetHolder, WeightedDraw> {
    ShuffleService::new(
        &registry(),
        SharedConfiguration::new(configuration),
        SetHolder::new(),
        WeightedDraw::seeded(seed),
    )
    .unwrap()
}

fn assert_unique(selection: &Selection) {
    let ids: HashSet<_> = selection.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), selection.len(), "duplicate card in {:?}", selection);
}

// =============================================================================
// Reshuffle
// =============================================================================

#[test]
fn test_shuffle_set_publishes_to_holder() {
    let mut service = service(Configuration::new().with_expansion(BASE), 1);

    let set = service.shuffle_set().unwrap();

    assert_eq!(service.holder().revision(), 1);
    assert_eq!(service.holder().selection(), &set);
    assert_eq!(set.kingdom_cards.len(), 10);
    assert!(set.special_cards.is_empty());
}

#[test]
fn test_only_enabled_expansions_are_drawn() {
    let mut service = service(Configuration::new().with_expansion(EMPIRES), 2);

    for _ in 0..20 {
        let set = service.shuffle_set().unwrap();
        assert!(set.kingdom_cards.iter().all(|c| c.expansions.contains(&EMPIRES)));
        assert_unique(&set);
    }
}

#[test]
fn test_split_pile_bottom_is_never_drawn() {
    let mut service = service(Configuration::new().with_expansion(BASE), 3);

    for _ in 0..50 {
        let set = service.shuffle_set().unwrap();
        assert!(!set.contains(CardId::new(30)));
    }
}

#[test]
fn test_configuration_is_read_at_trigger_time() {
    let shared = SharedConfiguration::new(Configuration::new().with_expansion(BASE));
    let mut service = ShuffleService::new(
        &registry(),
        shared.clone(),
        SetHolder::new(),
        WeightedDraw::seeded(4),
    )
    .unwrap();

    assert!(service.shuffle_set().unwrap().special_cards.is_empty());

    shared.publish(
        Configuration::new()
            .with_expansions([BASE, EMPIRES, RENAISSANCE])
            .with_special_count(SpecialCategory::Event, 2)
            .with_special_count(SpecialCategory::Project, 1),
    );
    let set = service.shuffle_set().unwrap();

    assert_eq!(set.special_cards.len(), 3);
    assert_eq!(set.special_cards[0].special_category(), Some(SpecialCategory::Event));
    assert_eq!(set.special_cards[1].special_category(), Some(SpecialCategory::Event));
    assert_eq!(set.special_cards[2].special_category(), Some(SpecialCategory::Project));
}

#[test]
fn test_special_category_without_enabled_cards_fails() {
    // Landmarks exist only in Empires, which is disabled.
    let mut service = service(
        Configuration::new()
            .with_expansion(BASE)
            .with_special_count(SpecialCategory::Landmark, 1),
        5,
    );

    assert_eq!(
        service.shuffle_set(),
        Err(SelectionError::Draw(DrawError::InsufficientCandidates {
            requested: 1,
            available: 0
        }))
    );
    assert_eq!(service.holder().revision(), 0, "failed shuffles publish nothing");
}

#[test]
fn test_cost_distribution_biases_kingdom() {
    // Only cost 2 and 3 carry weight: twelve cards, ten drawn.
    let config = Configuration::new()
        .with_expansions([BASE, EMPIRES])
        .with_cost_distribution(CostDistribution::new().with_weight(2, 1.0).with_weight(3, 1.0));
    let mut service = service(config, 6);

    for _ in 0..20 {
        let set = service.shuffle_set().unwrap();
        assert!(set.kingdom_cards.iter().all(|c| c.cost == 2 || c.cost == 3));
        assert_unique(&set);
    }
}

#[test]
fn test_same_seed_same_selection() {
    let config = Configuration::new()
        .with_expansions([BASE, EMPIRES])
        .with_special_count(SpecialCategory::Event, 2);

    let first = service(config.clone(), 42).shuffle_set().unwrap();
    let second = service(config, 42).shuffle_set().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_reshuffles_differ_but_stay_valid() {
    let mut service = service(Configuration::new().with_expansions([BASE, EMPIRES]), 7);

    let sets: Vec<_> = (0..5).map(|_| service.shuffle_set().unwrap()).collect();

    for set in &sets {
        assert_eq!(set.kingdom_cards.len(), 10);
        assert_unique(set);
    }
    assert!(sets.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn test_card_tagged_with_two_categories_appears_once() {
    let mut registry: CardRegistry = (0..10)
        .map(|i| Card::new(CardId::new(i), format!("Kingdom {}", i), 3).with_expansion(BASE).kingdom())
        .collect();
    registry.register(
        Card::new(CardId::new(100), "Seaway", 5)
            .with_expansion(BASE)
            .with_type(CardType::Event)
            .with_type(CardType::Way),
    );
    registry.register(
        Card::new(CardId::new(101), "Way of the Mole", 0)
            .with_expansion(BASE)
            .with_type(CardType::Way),
    );
    let config = Configuration::new()
        .with_expansion(BASE)
        .with_special_count(SpecialCategory::Event, 1)
        .with_special_count(SpecialCategory::Way, 1);

    for seed in 0..20 {
        let mut service =
            ShuffleService::new(&registry, config.clone(), SetHolder::new(), WeightedDraw::seeded(seed))
                .unwrap();
        let set = service.shuffle_set().unwrap();

        let special: Vec<_> = set.special_cards.iter().map(|c| c.id.raw()).collect();
        assert_eq!(special, vec![100, 101]);
        assert_unique(&set);
    }
}

#[test]
fn test_checkpoint_replays_shuffles() {
    let config = Configuration::new()
        .with_expansions([BASE, EMPIRES])
        .with_special_count(SpecialCategory::Event, 1);
    let mut service = service(config, 12);
    service.shuffle_set().unwrap();

    let checkpoint = service.checkpoint();
    let first = service.shuffle_set().unwrap();
    let second = service.shuffle_set().unwrap();

    service.restore(&checkpoint);
    assert_eq!(service.shuffle_set().unwrap(), first);
    assert_eq!(service.shuffle_set().unwrap(), second);
}

// =============================================================================
// Single-Card Replacement
// =============================================================================

#[test]
fn test_replace_kingdom_card_in_place() {
    let mut service = service(Configuration::new().with_expansions([BASE, EMPIRES]), 8);
    let set = service.shuffle_set().unwrap();
    let target = set.kingdom_cards[3].clone();

    let (old, new) = service.shuffle_single_card(&target).unwrap();

    assert_eq!(old, target);
    assert!(!set.contains(new.id), "replacement was already on the board");
    let updated = service.holder().selection();
    assert_eq!(updated.kingdom_cards[3], new);
    assert_eq!(updated.kingdom_cards.len(), 10);
    assert_unique(updated);
    assert_eq!(service.holder().revision(), 2);
}

#[test]
fn test_replace_event_stays_in_event_pool() {
    let config = Configuration::new()
        .with_expansions([BASE, EMPIRES])
        .with_special_count(SpecialCategory::Event, 2)
        .with_special_count(SpecialCategory::Landmark, 2);
    let mut service = service(config, 9);
    let set = service.shuffle_set().unwrap();

    for _ in 0..10 {
        let current = service.holder().current();
        let target = current.special_cards[0].clone();

        let (_, new) = service.shuffle_single_card(&target).unwrap();

        assert_eq!(new.special_category(), Some(SpecialCategory::Event));
        assert!(!current.special_cards.iter().any(|c| c.id == new.id));
        assert_unique(service.holder().selection());
    }
    assert_eq!(service.holder().selection().kingdom_cards, set.kingdom_cards);
}

#[test]
fn test_replacement_fails_when_whole_category_is_on_board() {
    // All six events are on the board, so nothing is left to swap in.
    let config = Configuration::new()
        .with_expansion(EMPIRES)
        .with_special_count(SpecialCategory::Event, 6);
    let mut service = service(config, 10);
    let set = service.shuffle_set().unwrap();

    let err = service.shuffle_single_card(&set.special_cards[0]).unwrap_err();
    assert!(matches!(
        err,
        SelectionError::Draw(DrawError::InsufficientCandidates { requested: 1, .. })
    ));
    assert_eq!(service.holder().selection(), &set);
}

#[test]
fn test_external_holder_by_reference() {
    let mut holder = SetHolder::new();
    {
        let mut service = ShuffleService::new(
            &registry(),
            Configuration::new().with_expansion(BASE),
            &mut holder,
            WeightedDraw::seeded(11),
        )
        .unwrap();
        service.shuffle_set().unwrap();
    }

    assert_eq!(holder.revision(), 1);
    assert_eq!(holder.current().kingdom_cards.len(), 10);
}
