//! Live adapters for the `Entropy` port.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::Entropy;

/// Entropy from the thread-local RNG, seeded by the operating system.
pub struct LiveEntropy;

impl LiveEntropy {
    /// Creates a new live entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for LiveEntropy {
    fn index_below(&self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }

    fn unit(&self) -> f64 {
        rand::rng().random()
    }
}

/// Reproducible entropy from a fixed seed.
///
/// Two sources built from the same seed yield the same stream, so the same
/// participants draw the same assignment.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Entropy for SeededEntropy {
    fn index_below(&self, bound: usize) -> usize {
        self.rng.lock().expect("entropy lock poisoned").random_range(0..bound)
    }

    fn unit(&self) -> f64 {
        self.rng.lock().expect("entropy lock poisoned").random()
    }
}
