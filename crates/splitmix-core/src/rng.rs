//! Deterministic RNG helpers.
//!
//! This is intentionally small. It is **not** cryptographic.
//!
//! Every derived draw on [`DeterministicRng`] consumes exactly one `next_u64()` unless its docs say
//! otherwise, so a recorded trace of raw outputs can be replayed against any of them.

use std::collections::BTreeMap;
use std::num::NonZeroU64;

use crate::choice;
use crate::dice::{self, DiceRoll};
use crate::error::{Result, RngError};

/// Weyl increment added to the state on every step (odd, so the state walks all 2^64 values).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// 2^-53.
const DOUBLE_UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Uniform double in `[0, 1)` built from the top 53 bits of one raw draw.
    fn next_double(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// `next_u64() % n`.
    ///
    /// This is plain modulo reduction and is biased towards small values when `n` is not a power
    /// of two. Sequences must match other SplitMix64 bindings bit for bit, so the bias is kept;
    /// use [`DeterministicRng::random_range_unbiased`] when that does not matter.
    fn random_range(&mut self, n: u64) -> Result<u64> {
        let n = NonZeroU64::new(n).ok_or_else(|| RngError::invalid("n", "interval is empty"))?;
        Ok(bounded(self, n))
    }

    /// Uniform value in `[0, n)` via rejection sampling.
    ///
    /// May consume more than one raw draw, so it does not replay against `random_range`.
    fn random_range_unbiased(&mut self, n: u64) -> Result<u64> {
        if n == 0 {
            return Err(RngError::invalid("n", "interval is empty"));
        }
        // (2^64 - n) % n: the count of low raw values that would over-represent small results.
        let threshold = n.wrapping_neg() % n;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return Ok(r % n);
            }
        }
    }

    /// Uniform (modulo-biased) integer in `[low, high]`.
    fn random_int(&mut self, low: i64, high: i64) -> Result<i64> {
        if low > high {
            return Err(RngError::invalid("low", "interval is empty"));
        }
        // The span is computed in the unsigned domain so `i64::MIN..=i64::MAX` does not overflow.
        let span = high.wrapping_sub(low) as u64;
        let offset = match span.checked_add(1).and_then(NonZeroU64::new) {
            Some(n) => bounded(self, n),
            // Full 2^64-wide interval: the reduction is the identity.
            None => self.next_u64(),
        };
        Ok(low.wrapping_add(offset as i64))
    }

    /// Coin toss: 0 or 1.
    fn toss(&mut self) -> u8 {
        (self.next_u64() % 2) as u8
    }

    fn next_bool(&mut self) -> bool {
        self.toss() == 1
    }

    fn random_choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        choice::random_choice(self, items)
    }

    /// Weighted pick in slice order. Rounding overshoot lands on the last entry, even a
    /// zero-weight one.
    fn weighted_choice<'a, T>(&mut self, items: &'a [(T, f64)]) -> Result<&'a T> {
        choice::weighted_choice(self, items)
    }

    /// Weighted pick over a mapping, walked in ascending key order; overshoot lands on the
    /// largest key.
    fn weighted_key<'a, K: Ord>(&mut self, weights: &'a BTreeMap<K, f64>) -> Result<&'a K> {
        choice::weighted_key(self, weights)
    }

    fn dice(&mut self, count: i64, sides: i64) -> Result<DiceRoll> {
        dice::roll(self, count, sides)
    }
}

/// Modulo reduction for a divisor already known to be non-zero.
pub(crate) fn bounded<R: DeterministicRng + ?Sized>(rng: &mut R, n: NonZeroU64) -> u64 {
    rng.next_u64() % n.get()
}

/// SplitMix64: fixed-increment generator with a single 64-bit state word.
///
/// Any seed is valid, including zero. The state can be saved with [`SplitMix64::get_state`] and
/// restored exactly with [`SplitMix64::new`] or [`SplitMix64::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn seed(&mut self, seed: u64) {
        self.state = seed;
    }

    pub const fn get_state(&self) -> u64 {
        self.state
    }

    /// Independent generator for `stream`, derived from the current state without advancing it.
    pub fn fork(&self, stream: u64) -> Self {
        Self::new(derive_seed(self.state, stream, 0))
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.step()
    }
}

/// The SplitMix64 output finalizer.
pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Seed for one logical stream (session, worker, test case...) under a global seed.
pub fn derive_seed(global_seed: u64, stream_id: u64, substream: u64) -> u64 {
    let x = global_seed ^ mix64(stream_id.wrapping_add(GOLDEN_GAMMA)) ^ mix64(substream);
    mix64(x)
}
