//! Entropy port feeding the shuffle and derangement algorithms.

/// Source of uniform randomness.
///
/// Injecting entropy instead of calling a global RNG lets tests pin a seed,
/// and lets a recorded draw be replayed exactly.
pub trait Entropy: Send + Sync {
    /// Returns an index drawn uniformly from `0..bound`.
    ///
    /// Callers never pass `bound == 0`.
    fn index_below(&self, bound: usize) -> usize;

    /// Returns a float drawn uniformly from `[0, 1)`.
    fn unit(&self) -> f64;
}
