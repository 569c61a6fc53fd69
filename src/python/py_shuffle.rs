//! Shuffle service bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::cards::{CardCatalog, CardRegistry};
use crate::core::{DrawRng, DrawRngState, SelectionError};
use crate::draw::WeightedDraw;
use crate::shuffle::{Selection, SetHolder, SharedConfiguration, ShuffleService};

use super::py_cards::{PyCard, PyConfiguration};

fn to_py_err(e: SelectionError) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", e))
}

fn split(selection: &Selection) -> (Vec<PyCard>, Vec<PyCard>) {
    (
        selection.kingdom_cards.iter().cloned().map(PyCard).collect(),
        selection.special_cards.iter().cloned().map(PyCard).collect(),
    )
}

/// Python wrapper for the shuffle service.
///
/// Holds the card catalog, the latest configuration and the current
/// selection. Not shareable across threads.
#[pyclass(name = "Randomizer", unsendable)]
pub struct PyRandomizer {
    configuration: SharedConfiguration,
    service: ShuffleService<SharedConfiguration, SetHolder, WeightedDraw>,
}

#[pymethods]
impl PyRandomizer {
    /// Create a randomizer over `cards`.
    ///
    /// # Arguments
    /// - cards: the full catalog; IDs must be unique
    /// - configuration: initial settings
    /// - seed: RNG seed for reproducible selections (entropy if omitted)
    #[new]
    #[pyo3(signature = (cards, configuration, seed = None))]
    fn new(cards: Vec<PyCard>, configuration: &PyConfiguration, seed: Option<u64>) -> PyResult<Self> {
        let mut registry = CardRegistry::new();
        for card in cards {
            if registry.contains(card.0.id) {
                return Err(PyErr::new::<PyValueError, _>(format!(
                    "duplicate card id {}",
                    card.0.id.raw()
                )));
            }
            registry.register(card.0);
        }

        let catalog = CardCatalog::load(&registry).map_err(|e| to_py_err(e.into()))?;
        let rng = seed.map_or_else(DrawRng::from_entropy, DrawRng::new);
        let shared = SharedConfiguration::new(configuration.0.clone());
        let service = ShuffleService::with_catalog(
            catalog,
            shared.clone(),
            SetHolder::new(),
            WeightedDraw::new(rng),
        );

        Ok(Self {
            configuration: shared,
            service,
        })
    }

    /// Publish a new configuration for subsequent shuffles.
    fn set_configuration(&self, configuration: &PyConfiguration) {
        self.configuration.publish(configuration.0.clone());
    }

    /// Draw a new selection. Returns (kingdom_cards, special_cards).
    fn shuffle_set(&mut self) -> PyResult<(Vec<PyCard>, Vec<PyCard>)> {
        let selection = self.service.shuffle_set().map_err(to_py_err)?;
        Ok(split(&selection))
    }

    /// Replace one card of the current selection. Returns (old, new).
    fn shuffle_single_card(&mut self, card: &PyCard) -> PyResult<(PyCard, PyCard)> {
        let (old, new) = self.service.shuffle_single_card(&card.0).map_err(to_py_err)?;
        Ok((PyCard(old), PyCard(new)))
    }

    /// The current selection as (kingdom_cards, special_cards).
    fn current(&self) -> (Vec<PyCard>, Vec<PyCard>) {
        split(self.service.holder().selection())
    }

    /// Opaque bytes capturing the RNG, for `restore`.
    fn checkpoint<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .service
            .checkpoint()
            .to_bytes()
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Rewind the RNG to a `checkpoint`; later shuffles repeat.
    fn restore(&mut self, checkpoint: &[u8]) -> PyResult<()> {
        let state = DrawRngState::from_bytes(checkpoint)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        self.service.restore(&state);
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!("Randomizer(cards={})", self.service.catalog().len())
    }
}
