//! Weighted random index selection
//!
//! Draws one index from a vector of non-negative weights, with probability
//! proportional to each weight. The scan is linear because weight vectors are
//! expected to hold a handful of alternatives.

use rand::Rng;

use crate::error::SelectionError;

/// Select an index with probability `weights[i] / sum(weights)`.
///
/// Returns `Ok(None)` when `weights` is empty or every weight is zero. The
/// random source is only consumed when an index is actually drawn.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidWeight`] for a negative, NaN or infinite
/// weight and [`SelectionError::WeightOverflow`] when the sum is not finite.
///
/// # Example
///
/// ```
/// use libappkit::selection::select_weighted_index;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let index = select_weighted_index(&[1.0, 0.0, 0.0], &mut rng).unwrap();
/// assert_eq!(index, Some(0));
/// assert_eq!(select_weighted_index(&[], &mut rng).unwrap(), None);
/// ```
pub fn select_weighted_index<R: Rng + ?Sized>(
    weights: &[f64],
    rng: &mut R,
) -> Result<Option<usize>, SelectionError> {
    let total = total_weight(weights)?;
    if total == 0.0 {
        tracing::trace!(n = weights.len(), "No selection: empty or zero-sum weights");
        return Ok(None);
    }

    let point = rng.gen_range(0.0..total);
    let mut acc = 0.0;
    let mut last_positive = None;

    for (index, &weight) in weights.iter().enumerate() {
        if weight == 0.0 {
            continue;
        }
        acc += weight;
        last_positive = Some(index);
        if point < acc {
            tracing::trace!(n = weights.len(), total, index, "Weighted index selected");
            return Ok(Some(index));
        }
    }

    // Rounding in the running total can leave `point` just past the end.
    Ok(last_positive)
}

/// [`select_weighted_index`] over the thread-local random source.
pub fn pick_weighted_index(weights: &[f64]) -> Result<Option<usize>, SelectionError> {
    select_weighted_index(weights, &mut rand::thread_rng())
}

/// Validate every weight and return their sum.
fn total_weight(weights: &[f64]) -> Result<f64, SelectionError> {
    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(SelectionError::InvalidWeight { index, weight });
        }
        total += weight;
    }

    if !total.is_finite() {
        return Err(SelectionError::WeightOverflow);
    }

    Ok(total)
}
