//! Python bindings for the kingdom randomizer.
//!
//! # Quick Start
//!
//! ```python
//! import kingdom_randomizer as kr
//!
//! cards = [
//!     kr.Card(id=i, name=f"Card {i}", cost=3, expansions=[1], types=["Action"], is_kingdom_card=True)
//!     for i in range(20)
//! ]
//! config = kr.Configuration(expansions=[1], cost_distribution={3: 1.0})
//!
//! randomizer = kr.Randomizer(cards, config, seed=42)
//! kingdom, special = randomizer.shuffle_set()
//! old, new = randomizer.shuffle_single_card(kingdom[0])
//!
//! saved = randomizer.checkpoint()
//! again = randomizer.shuffle_set()
//! randomizer.restore(saved)
//! assert randomizer.shuffle_set() == again
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_shuffle;

pub use py_cards::*;
pub use py_shuffle::*;

/// kingdom_randomizer: weighted kingdom selection for deckbuilders.
#[pymodule]
fn kingdom_randomizer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyConfiguration>()?;
    m.add_class::<PyRandomizer>()?;
    Ok(())
}
