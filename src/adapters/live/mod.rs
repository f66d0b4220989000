//! Live adapters backed by the operating system.

pub mod clock;
pub mod entropy;

pub use clock::LiveClock;
pub use entropy::{LiveEntropy, SeededEntropy};
