//! Cassettes: YAML recordings of port interactions, used to reproduce a
//! draw exactly.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
