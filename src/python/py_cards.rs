//! Card and configuration bindings for Python.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Card, CardId, CardType, ExpansionId, SpecialCategory};
use crate::core::{Configuration, CostDistribution, UnknownCardType};

/// Fields accepted by the Python `Card` constructor.
#[derive(Clone, Debug, Default)]
pub struct CardSpec {
    pub id: u32,
    pub name: String,
    pub cost: u32,
    pub expansions: Vec<u32>,
    pub types: Vec<String>,
    pub is_kingdom_card: bool,
    pub is_part_of_split_pile: bool,
    pub is_on_top_of_split_pile: bool,
}

impl CardSpec {
    pub fn build(self) -> Result<Card, UnknownCardType> {
        let mut card = Card::new(CardId::new(self.id), self.name, self.cost);
        for expansion in self.expansions {
            card = card.with_expansion(ExpansionId::new(expansion));
        }
        for name in &self.types {
            card = card.with_type(name.parse()?);
        }
        card.is_kingdom_card = self.is_kingdom_card;
        if self.is_part_of_split_pile {
            card = card.in_split_pile(self.is_on_top_of_split_pile);
        }
        Ok(card)
    }
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a new card.
    ///
    /// `types` are printed type names such as "Action" or "Event". Only the
    /// top card of a split pile is ever drawn as a kingdom card.
    #[new]
    #[pyo3(signature = (
        id,
        name,
        cost,
        expansions = Vec::new(),
        types = Vec::new(),
        is_kingdom_card = false,
        is_part_of_split_pile = false,
        is_on_top_of_split_pile = false
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        name: String,
        cost: u32,
        expansions: Vec<u32>,
        types: Vec<String>,
        is_kingdom_card: bool,
        is_part_of_split_pile: bool,
        is_on_top_of_split_pile: bool,
    ) -> PyResult<Self> {
        let spec = CardSpec {
            id,
            name,
            cost,
            expansions,
            types,
            is_kingdom_card,
            is_part_of_split_pile,
            is_on_top_of_split_pile,
        };
        let card = spec
            .build()
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(Self(card))
    }

    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn cost(&self) -> u32 {
        self.0.cost
    }

    #[getter]
    fn expansions(&self) -> Vec<u32> {
        self.0.expansions.iter().map(|e| e.raw()).collect()
    }

    #[getter]
    fn is_kingdom_card(&self) -> bool {
        self.0.is_kingdom_card
    }

    #[getter]
    fn is_part_of_split_pile(&self) -> bool {
        self.0.is_part_of_split_pile
    }

    #[getter]
    fn is_on_top_of_split_pile(&self) -> bool {
        self.0.is_on_top_of_split_pile
    }

    /// Special category name ("event", "landmark", ...) or None.
    #[getter]
    fn special_category(&self) -> Option<String> {
        self.0.special_category().map(|c| c.to_string())
    }

    fn __repr__(&self) -> String {
        format!("Card(id={}, name={:?}, cost={})", self.0.id.raw(), self.0.name, self.0.cost)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id.raw())
    }
}

/// Python wrapper for Configuration.
#[pyclass(name = "Configuration")]
#[derive(Clone, Debug)]
pub struct PyConfiguration(pub Configuration);

#[pymethods]
impl PyConfiguration {
    /// Create a configuration.
    ///
    /// # Arguments
    /// - expansions: enabled expansion IDs
    /// - events, landmarks, projects, ways: cards to draw per category
    /// - cost_distribution: optional {cost: weight} table
    #[new]
    #[pyo3(signature = (
        expansions,
        events = 0,
        landmarks = 0,
        projects = 0,
        ways = 0,
        cost_distribution = None
    ))]
    fn new(
        expansions: Vec<u32>,
        events: usize,
        landmarks: usize,
        projects: usize,
        ways: usize,
        cost_distribution: Option<HashMap<u32, f64>>,
    ) -> Self {
        let distribution: CostDistribution =
            cost_distribution.unwrap_or_default().into_iter().collect();
        let config = Configuration::new()
            .with_expansions(expansions.into_iter().map(ExpansionId::new))
            .with_special_count(SpecialCategory::Event, events)
            .with_special_count(SpecialCategory::Landmark, landmarks)
            .with_special_count(SpecialCategory::Project, projects)
            .with_special_count(SpecialCategory::Way, ways)
            .with_cost_distribution(distribution);
        Self(config)
    }

    /// Raise ValueError if the configuration cannot be used.
    fn validate(&self) -> PyResult<()> {
        self.0
            .validate()
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn expansions(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.0.expansions.iter().map(|e| e.raw()).collect();
        ids.sort_unstable();
        ids
    }

    fn __repr__(&self) -> String {
        let count = self.0.special_cards_count;
        format!(
            "Configuration(expansions={:?}, events={}, landmarks={}, projects={}, ways={})",
            self.expansions(),
            count.events,
            count.landmarks,
            count.projects,
            count.ways
        )
    }
}
