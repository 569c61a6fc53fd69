//! Collaborators the shuffle service reads from and publishes to.
//!
//! - `ConfigurationProvider`: latest user settings, read at trigger time
//! - `SelectionHolder`: latest selection plus its two mutators
//!
//! The catalog side lives in [`crate::cards::CatalogProvider`].

use std::cell::RefCell;
use std::rc::Rc;

use super::set::Selection;
use crate::cards::Card;
use crate::core::Configuration;

/// Supplies the most recently published configuration.
pub trait ConfigurationProvider {
    fn configuration(&self) -> Configuration;
}

impl ConfigurationProvider for Configuration {
    fn configuration(&self) -> Configuration {
        self.clone()
    }
}

/// Latest-value configuration cell.
///
/// Clones share the same cell: a settings screen publishes, the shuffle
/// service reads whatever was published last.
///
/// ```
/// use kingdom_randomizer::cards::ExpansionId;
/// use kingdom_randomizer::core::Configuration;
/// use kingdom_randomizer::shuffle::{ConfigurationProvider, SharedConfiguration};
///
/// let shared = SharedConfiguration::default();
/// let reader = shared.clone();
/// shared.publish(Configuration::new().with_expansion(ExpansionId::new(3)));
///
/// assert!(reader.configuration().is_enabled(ExpansionId::new(3)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedConfiguration(Rc<RefCell<Configuration>>);

impl SharedConfiguration {
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self(Rc::new(RefCell::new(configuration)))
    }

    /// Replace the current configuration.
    pub fn publish(&self, configuration: Configuration) {
        *self.0.borrow_mut() = configuration;
    }
}

impl ConfigurationProvider for SharedConfiguration {
    fn configuration(&self) -> Configuration {
        self.0.borrow().clone()
    }
}

/// Holds the current selection and applies updates to it.
pub trait SelectionHolder {
    /// Snapshot of the latest selection.
    fn current(&self) -> Selection;

    /// Replace the whole selection.
    fn update_set(&mut self, selection: Selection);

    /// Swap one card in place. Returns `false` if `old` is not held.
    fn update_single_card(&mut self, old: &Card, new: Card) -> bool;
}

impl<H: SelectionHolder> SelectionHolder for &mut H {
    fn current(&self) -> Selection {
        (**self).current()
    }

    fn update_set(&mut self, selection: Selection) {
        (**self).update_set(selection);
    }

    fn update_single_card(&mut self, old: &Card, new: Card) -> bool {
        (**self).update_single_card(old, new)
    }
}

/// In-memory selection holder.
///
/// `revision` counts applied updates, so observers can tell whether the
/// selection changed since they last looked.
#[derive(Clone, Debug, Default)]
pub struct SetHolder {
    current: Selection,
    revision: u64,
}

impl SetHolder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection.
    #[must_use]
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            current: selection,
            revision: 0,
        }
    }

    /// Borrow the latest selection without cloning.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.current
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl SelectionHolder for SetHolder {
    fn current(&self) -> Selection {
        self.current.clone()
    }

    fn update_set(&mut self, selection: Selection) {
        self.current = selection;
        self.revision += 1;
    }

    fn update_single_card(&mut self, old: &Card, new: Card) -> bool {
        let replaced = self.current.replace_card(old, new);
        if replaced {
            self.revision += 1;
        }
        replaced
    }
}
