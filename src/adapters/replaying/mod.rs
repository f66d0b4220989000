//! Replaying adapters that serve recorded interactions back.

pub mod clock;
pub mod entropy;

pub use clock::ReplayingClock;
pub use entropy::ReplayingEntropy;
