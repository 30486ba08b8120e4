//! Uniform random draws behind an injectable source.
//!
//! Generators take `&mut impl RandomSource` instead of reaching for a global
//! RNG, so callers can pin the sequence of draws.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Integer uniformly in `[min, max]`, inclusive on both ends.
///
/// Reversed bounds are swapped.
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = ordered(min, max);
    let span = hi.abs_diff(lo);
    let offset = ((rng.next_unit() * (span as f64 + 1.0)).floor() as u64).min(span);
    lo.saturating_add_unsigned(offset)
}

/// Float uniformly in `[min, max)`. Reversed bounds are swapped.
pub fn random_float<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let (lo, hi) = ordered(min, max);
    lo + rng.next_unit() * (hi - lo)
}
