//! Port traits defining external boundaries.
//!
//! The draw core never touches an ambient RNG or the system clock directly.
//! Both are reached through these traits, with implementations in
//! `src/adapters/`.

pub mod clock;
pub mod entropy;

pub use clock::Clock;
pub use entropy::Entropy;
