//! Picking elements out of collections.

use std::collections::BTreeMap;
use std::num::NonZeroU64;

use crate::error::{Result, RngError};
use crate::rng::{bounded, DeterministicRng};

/// Uniform pick from a non-empty slice (index = `random_range(len)`).
pub fn random_choice<'a, R, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T>
where
    R: DeterministicRng + ?Sized,
{
    let len = NonZeroU64::new(items.len() as u64)
        .ok_or_else(|| RngError::invalid("items", "table is empty"))?;
    let idx = bounded(rng, len) as usize;
    Ok(&items[idx])
}

/// Weighted pick from `(item, weight)` pairs, walked in slice order.
///
/// Zero-weight entries are never selected by the walk itself. When rounding leaves the draw past
/// every weight, the last entry is returned even if its weight is zero.
pub fn weighted_choice<'a, R, T>(rng: &mut R, items: &'a [(T, f64)]) -> Result<&'a T>
where
    R: DeterministicRng + ?Sized,
{
    pick(rng, items.iter().map(|(item, w)| (item, *w)))
}

/// Weighted pick from a mapping.
///
/// Keys are walked in ascending `Ord` order, so the same mapping and the same draw always select
/// the same key regardless of how the mapping was built. The rounding fallback is the largest
/// key, whatever its weight.
pub fn weighted_key<'a, R, K>(rng: &mut R, weights: &'a BTreeMap<K, f64>) -> Result<&'a K>
where
    R: DeterministicRng + ?Sized,
    K: Ord,
{
    pick(rng, weights.iter().map(|(k, w)| (k, *w)))
}

/// Validates the weights, draws once, then walks `entries` subtracting each weight from the draw
/// until it falls inside one. Rounding can leave a sliver past the end; that lands on the last
/// entry.
fn pick<'a, R, T, I>(rng: &mut R, entries: I) -> Result<&'a T>
where
    R: DeterministicRng + ?Sized,
    T: 'a,
    I: Iterator<Item = (&'a T, f64)> + Clone,
{
    let mut total = 0.0_f64;
    let mut count = 0_usize;
    for (_, w) in entries.clone() {
        // `!(w >= 0.0)` also rejects NaN.
        if !(w >= 0.0) {
            return Err(RngError::invalid("weights", "weight value less than zero"));
        }
        total += w;
        count += 1;
    }
    if count == 0 {
        return Err(RngError::invalid("weights", "table is empty"));
    }
    if total == 0.0 {
        return Err(RngError::invalid("weights", "all weights are zero"));
    }
    if !total.is_finite() {
        return Err(RngError::invalid("weights", "total weight is not finite"));
    }

    let mut draw = rng.next_double() * total;
    let mut last = None;
    for (item, w) in entries {
        if draw < w {
            return Ok(item);
        }
        draw -= w;
        last = Some(item);
    }
    last.ok_or_else(|| RngError::invalid("weights", "table is empty"))
}
