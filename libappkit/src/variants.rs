//! Weighted alternatives
//!
//! Pairs values with designer-tunable weights and draws one of them through
//! [`select_weighted_index`].

use rand::Rng;

use crate::error::SelectionError;
use crate::selection::select_weighted_index;

/// An ordered set of alternatives with relative likelihoods.
///
/// # Example
///
/// ```
/// use libappkit::variants::WeightedVariants;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut greetings = WeightedVariants::new();
/// greetings.push("Welcome back!", 3.0);
/// greetings.push("Good to see you", 1.0);
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let greeting = greetings.choose(&mut rng).unwrap();
/// assert!(greeting.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVariants<T> {
    entries: Vec<(T, f64)>,
}

impl<T> WeightedVariants<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from `(value, weight)` pairs, keeping their order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: T, weight: f64) {
        self.entries.push((value, weight));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, weight)| *weight).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.entries.iter().map(|(value, weight)| (value, *weight))
    }

    /// Draw one value. `Ok(None)` when there is nothing with positive weight.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<&T>, SelectionError> {
        let index = select_weighted_index(&self.weights(), rng)?;
        Ok(index.map(|i| &self.entries[i].0))
    }

    /// [`WeightedVariants::choose`] over the thread-local random source.
    pub fn choose_random(&self) -> Result<Option<&T>, SelectionError> {
        self.choose(&mut rand::thread_rng())
    }
}

impl<T> Default for WeightedVariants<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, f64)> for WeightedVariants<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
