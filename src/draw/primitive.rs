//! Random draw without replacement.
//!
//! The selection engine never touches randomness directly. It computes
//! candidate pools and weights, then asks a [`DrawPrimitive`] for the
//! actual pick. Tests substitute a scripted primitive to observe exactly
//! what the engine requested.

use std::borrow::Cow;

use tracing::trace;

use crate::core::{DrawError, DrawRng, DrawRngState};

/// Draws a subset of items without replacement.
///
/// ## Contract
///
/// - `weights`, when given, has one entry per item.
/// - The result holds `count` distinct positions of `items`.
/// - With weights, each successive draw picks a remaining item with
///   probability proportional to its weight; otherwise draws are uniform.
pub trait DrawPrimitive {
    fn draw<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
        weights: Option<&[f64]>,
    ) -> Result<Vec<T>, DrawError>;
}

impl<D: DrawPrimitive> DrawPrimitive for &mut D {
    fn draw<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
        weights: Option<&[f64]>,
    ) -> Result<Vec<T>, DrawError> {
        (**self).draw(items, count, weights)
    }
}

/// Default draw primitive backed by a [`DrawRng`].
///
/// Zero-weight items are never drawn. Requesting more items than can be
/// drawn fails with [`DrawError::InsufficientCandidates`] instead of
/// returning a short result.
///
/// ```
/// use kingdom_randomizer::draw::{DrawPrimitive, WeightedDraw};
///
/// let mut draw = WeightedDraw::seeded(42);
/// let picked = draw.draw(&["a", "b", "c"], 2, Some(&[1.0, 0.0, 1.0][..])).unwrap();
///
/// assert_eq!(picked.len(), 2);
/// assert!(!picked.contains(&"b"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WeightedDraw {
    rng: DrawRng,
}

impl WeightedDraw {
    #[must_use]
    pub fn new(rng: DrawRng) -> Self {
        Self { rng }
    }

    /// Deterministic primitive for reproducible selections.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(DrawRng::new(seed))
    }

    #[must_use]
    pub fn rng(&self) -> &DrawRng {
        &self.rng
    }

    /// Capture the RNG position so later draws can be replayed.
    #[must_use]
    pub fn checkpoint(&self) -> DrawRngState {
        self.rng.state()
    }

    /// Rewind (or fast-forward) to a captured position.
    pub fn restore(&mut self, state: &DrawRngState) {
        self.rng = DrawRng::from_state(state);
    }

    fn draw_uniform<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        self.rng
            .sample_indices(items.len(), count)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    fn draw_weighted<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
        weights: &[f64],
    ) -> Result<Vec<T>, DrawError> {
        let mut remaining = weights.to_vec();
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.rng.choose_weighted(&remaining).ok_or(
                DrawError::InsufficientCandidates {
                    requested: count,
                    available: drawn.len(),
                },
            )?;
            remaining[index] = 0.0;
            drawn.push(items[index].clone());
        }
        Ok(drawn)
    }
}

impl DrawPrimitive for WeightedDraw {
    fn draw<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
        weights: Option<&[f64]>,
    ) -> Result<Vec<T>, DrawError> {
        if let Some(weights) = weights {
            if weights.len() != items.len() {
                return Err(DrawError::WeightCountMismatch {
                    items: items.len(),
                    weights: weights.len(),
                });
            }
            if let Some((index, &weight)) = weights
                .iter()
                .enumerate()
                .find(|(_, w)| !w.is_finite() || **w < 0.0)
            {
                return Err(DrawError::InvalidWeight { index, weight });
            }
        }

        let available = match weights {
            Some(weights) => weights.iter().filter(|&&w| w > 0.0).count(),
            None => items.len(),
        };
        trace!(items = items.len(), available, count, weighted = weights.is_some(), "draw");
        if count > available {
            return Err(DrawError::InsufficientCandidates {
                requested: count,
                available,
            });
        }

        match weights {
            Some(weights) => {
                let weights = normalized(weights);
                self.draw_weighted(items, count, &weights)
            }
            None => Ok(self.draw_uniform(items, count)),
        }
    }
}

/// Scale `weights` down when their sum overflows, keeping proportions.
fn normalized(weights: &[f64]) -> Cow<'_, [f64]> {
    if weights.iter().sum::<f64>().is_finite() {
        return Cow::Borrowed(weights);
    }
    let max = weights.iter().copied().fold(0.0, f64::max);
    Cow::Owned(weights.iter().map(|w| w / max).collect())
}
