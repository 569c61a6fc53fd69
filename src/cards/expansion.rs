//! Expansions: the selectable sources cards belong to.

use serde::{Deserialize, Serialize};

/// Unique identifier for an expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpansionId(pub u32);

impl ExpansionId {
    /// Create a new expansion ID.
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

impl std::fmt::Display for ExpansionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expansion({})", self.0)
    }
}

/// A named expansion, e.g. "Base" or "Empires".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expansion {
    pub id: ExpansionId,
    pub name: String,
}

impl Expansion {
    #[must_use]
    pub fn new(id: ExpansionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_id() {
        let id = ExpansionId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Expansion(3)");
    }

    #[test]
    fn test_expansion() {
        let base = Expansion::new(ExpansionId::new(1), "Base");
        assert_eq!(base.name, "Base");
        assert_eq!(base, Expansion::new(ExpansionId::new(1), "Base"));
    }
}
