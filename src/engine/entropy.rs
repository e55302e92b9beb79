//! Injectable randomness.
//!
//! The engine never calls `rand` directly. Every draw goes through an
//! [`EntropySource`], so tests can script exact draw sequences and force
//! each branch.

use std::collections::VecDeque;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value a scripted draw may take; draws live in `[0, 1)`.
const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// A source of uniform draws in `[0, 1)`.
pub trait EntropySource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[range.start, range.end)`.
    fn next_in(&mut self, range: Range<f64>) -> f64 {
        range.start + self.next_unit() * (range.end - range.start)
    }

    /// Uniform index into a table of `len` entries. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// Adapter exposing any [`rand::Rng`] as an [`EntropySource`].
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(R);

impl<R: Rng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngEntropy<StdRng> {
    /// Deterministic generator for reproducible sessions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> EntropySource for RngEntropy<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats `fallback` forever.
///
/// Counts every draw taken so callers can assert that a code path did or
/// did not consume randomness.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    draws: VecDeque<f64>,
    fallback: f64,
    taken: usize,
}

impl ScriptedEntropy {
    /// Replays `draws` in order, then yields `0.0`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.0,
            taken: 0,
        }
    }

    /// Always yields `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(std::iter::empty()).with_fallback(value)
    }

    /// Value returned once the scripted draws are exhausted.
    #[must_use]
    pub fn with_fallback(mut self, value: f64) -> Self {
        self.fallback = value;
        self
    }

    /// Appends draws to the end of the script.
    pub fn push(&mut self, draws: impl IntoIterator<Item = f64>) {
        self.draws.extend(draws);
    }

    /// Number of draws consumed so far.
    pub const fn taken(&self) -> usize {
        self.taken
    }

    /// Scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_unit(&mut self) -> f64 {
        self.taken += 1;
        self.draws
            .pop_front()
            .unwrap_or(self.fallback)
            .clamp(0.0, MAX_UNIT)
    }
}
