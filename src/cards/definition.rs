//! Card definitions - static card data.
//!
//! A `Card` is immutable once loaded. Identity is its `CardId`; the
//! selection engine excludes cards by id, never by name.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::expansion::ExpansionId;
use crate::core::UnknownCardType;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Printed card type.
///
/// The last four variants are the special categories drawn next to the
/// ten kingdom cards; see [`SpecialCategory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Action,
    Treasure,
    Victory,
    Curse,
    Attack,
    Reaction,
    Duration,
    Reserve,
    Night,
    Event,
    Landmark,
    Project,
    Way,
}

impl CardType {
    /// The special category this type denotes, if any.
    #[must_use]
    pub const fn special_category(self) -> Option<SpecialCategory> {
        match self {
            CardType::Event => Some(SpecialCategory::Event),
            CardType::Landmark => Some(SpecialCategory::Landmark),
            CardType::Project => Some(SpecialCategory::Project),
            CardType::Way => Some(SpecialCategory::Way),
            _ => None,
        }
    }
}

impl std::str::FromStr for CardType {
    type Err = UnknownCardType;

    /// Parse a printed type name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let card_type = match s.to_ascii_lowercase().as_str() {
            "action" => CardType::Action,
            "treasure" => CardType::Treasure,
            "victory" => CardType::Victory,
            "curse" => CardType::Curse,
            "attack" => CardType::Attack,
            "reaction" => CardType::Reaction,
            "duration" => CardType::Duration,
            "reserve" => CardType::Reserve,
            "night" => CardType::Night,
            "event" => CardType::Event,
            "landmark" => CardType::Landmark,
            "project" => CardType::Project,
            "way" => CardType::Way,
            _ => return Err(UnknownCardType(s.to_string())),
        };
        Ok(card_type)
    }
}

/// Optional supplementary card kinds, drawn in configurable quantities.
///
/// Declaration order is the fixed category order used everywhere: in the
/// special-card list of a selection and when dispatching a replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialCategory {
    Event,
    Landmark,
    Project,
    Way,
}

impl SpecialCategory {
    /// All categories in draw order.
    pub const ALL: [SpecialCategory; 4] = [
        SpecialCategory::Event,
        SpecialCategory::Landmark,
        SpecialCategory::Project,
        SpecialCategory::Way,
    ];

    /// The card type tagging members of this category.
    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            SpecialCategory::Event => CardType::Event,
            SpecialCategory::Landmark => CardType::Landmark,
            SpecialCategory::Project => CardType::Project,
            SpecialCategory::Way => CardType::Way,
        }
    }
}

impl std::fmt::Display for SpecialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpecialCategory::Event => "event",
            SpecialCategory::Landmark => "landmark",
            SpecialCategory::Project => "project",
            SpecialCategory::Way => "way",
        };
        f.write_str(name)
    }
}

/// A card of the catalog.
///
/// ## Example
///
/// ```
/// use kingdom_randomizer::cards::{Card, CardId, CardType, ExpansionId, SpecialCategory};
///
/// let village = Card::new(CardId::new(1), "Village", 3)
///     .with_expansion(ExpansionId::new(1))
///     .with_type(CardType::Action)
///     .kingdom();
/// assert!(village.is_randomizable_kingdom_card());
/// assert_eq!(village.special_category(), None);
///
/// let alms = Card::new(CardId::new(2), "Alms", 0).with_type(CardType::Event);
/// assert_eq!(alms.special_category(), Some(SpecialCategory::Event));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub expansions: SmallVec<[ExpansionId; 2]>,
    pub types: SmallVec<[CardType; 2]>,
    #[serde(default)]
    pub is_kingdom_card: bool,
    /// Member of a split pile (e.g. Encampment/Plunder).
    #[serde(default)]
    pub is_part_of_split_pile: bool,
    /// Top card of its split pile; only this one represents the pile.
    #[serde(default)]
    pub is_on_top_of_split_pile: bool,
    pub cost: u32,
    #[serde(default)]
    pub potion: bool,
    #[serde(default)]
    pub debt: Option<u32>,
}

impl Card {
    /// Create a card with no expansions and no types.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            expansions: SmallVec::new(),
            types: SmallVec::new(),
            is_kingdom_card: false,
            is_part_of_split_pile: false,
            is_on_top_of_split_pile: false,
            cost,
            potion: false,
            debt: None,
        }
    }

    #[must_use]
    pub fn with_expansion(mut self, expansion: ExpansionId) -> Self {
        if !self.expansions.contains(&expansion) {
            self.expansions.push(expansion);
        }
        self
    }

    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        if !self.types.contains(&card_type) {
            self.types.push(card_type);
        }
        self
    }

    /// Mark as eligible for the ten kingdom slots.
    #[must_use]
    pub fn kingdom(mut self) -> Self {
        self.is_kingdom_card = true;
        self
    }

    /// Mark as member of a split pile.
    #[must_use]
    pub fn in_split_pile(mut self, on_top: bool) -> Self {
        self.is_part_of_split_pile = true;
        self.is_on_top_of_split_pile = on_top;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_potion(mut self) -> Self {
        self.potion = true;
        self
    }

    #[must_use]
    pub fn with_debt(mut self, debt: u32) -> Self {
        self.debt = Some(debt);
        self
    }

    #[must_use]
    pub fn has_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }

    /// Whether the card belongs to at least one of `expansions`.
    #[must_use]
    pub fn in_any_expansion(&self, expansions: &FxHashSet<ExpansionId>) -> bool {
        self.expansions.iter().any(|e| expansions.contains(e))
    }

    /// Every special category the card is tagged with, in category order.
    pub fn special_categories(&self) -> impl Iterator<Item = SpecialCategory> + '_ {
        SpecialCategory::ALL
            .into_iter()
            .filter(move |c| self.has_type(c.card_type()))
    }

    /// The special category the card is dispatched to.
    ///
    /// First match in Event, Landmark, Project, Way order.
    #[must_use]
    pub fn special_category(&self) -> Option<SpecialCategory> {
        self.special_categories().next()
    }

    /// Whether the card may fill one of the ten kingdom slots.
    ///
    /// Split piles are represented by their top card only.
    #[must_use]
    pub fn is_randomizable_kingdom_card(&self) -> bool {
        self.is_kingdom_card && (!self.is_part_of_split_pile || self.is_on_top_of_split_pile)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
