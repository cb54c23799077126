//! Random sources and shuffling
//!
//! Gameplay only ever draws randomness through [`RandomSource`], so a run can
//! be replayed from its seed or driven by a scripted sequence in tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random number source
pub trait RandomSource {
    /// Integer in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: usize) -> usize;

    /// Float in `[0, 1)`
    fn next_float(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_int(&mut self, bound: usize) -> usize {
        (**self).next_int(bound)
    }

    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }
}

/// PCG-backed source that remembers its seed
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Non-deterministic source for real play (seed drawn from the OS RNG)
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_int(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "next_int called with zero bound");
        self.rng.random_range(0..bound)
    }

    fn next_float(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Replays a fixed list of integers, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so a script can be
/// written in terms of catalog indices without knowing the call bounds.
/// An empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    fn next_raw(&mut self) -> usize {
        match self.values.pop_front() {
            Some(v) => {
                self.values.push_back(v);
                v
            }
            None => 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "next_int called with zero bound");
        self.next_raw() % bound
    }

    fn next_float(&mut self) -> f64 {
        // Scripted values are read as percentages
        (self.next_raw() % 100) as f64 / 100.0
    }
}

/// In-place Fisher-Yates shuffle
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], source: &mut R) {
    for i in (1..items.len()).rev() {
        let j = source.next_int(i + 1);
        items.swap(i, j);
    }
}
