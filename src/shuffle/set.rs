//! A produced selection: ten kingdom cards plus the special cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Number of kingdom cards in a full selection.
pub const KINGDOM_SIZE: usize = 10;

/// Cards chosen for one game.
///
/// Special cards are stored flat, in Event, Landmark, Project, Way order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub kingdom_cards: Vector<Card>,
    pub special_cards: Vector<Card>,
}

impl Selection {
    #[must_use]
    pub fn new(kingdom_cards: Vector<Card>, special_cards: Vector<Card>) -> Self {
        Self {
            kingdom_cards,
            special_cards,
        }
    }

    /// All cards, kingdom first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.kingdom_cards.iter().chain(self.special_cards.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kingdom_cards.len() + self.special_cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kingdom_cards.is_empty() && self.special_cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.iter().any(|c| c.id == id)
    }

    /// Substitute `new` for the card with `old`'s ID, in place.
    ///
    /// Returns `false` and leaves the selection untouched when `old` is
    /// not part of it.
    pub fn replace_card(&mut self, old: &Card, new: Card) -> bool {
        let target = [&mut self.kingdom_cards, &mut self.special_cards]
            .into_iter()
            .find_map(|cards| {
                let index = cards.iter().position(|c| c.id == old.id);
                index.map(|index| (cards, index))
            });

        match target {
            Some((cards, index)) => {
                cards.set(index, new);
                true
            }
            None => false,
        }
    }
}
