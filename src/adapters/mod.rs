//! Port implementations.
//!
//! - `live`: real randomness and the system clock.
//! - `recording`: wrap a live adapter and capture every call to a cassette.
//! - `replaying`: serve a captured cassette back, call for call.

pub mod live;
pub mod recording;
pub mod replaying;
