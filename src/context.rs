//! Service context bundling the port trait objects a draw needs.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveClock, LiveEntropy, SeededEntropy};
use crate::adapters::recording::{RecordingClock, RecordingEntropy};
use crate::adapters::replaying::{ReplayingClock, ReplayingEntropy};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::clock::Clock;
use crate::ports::entropy::Entropy;

/// Bundles the entropy and clock ports.
///
/// Constructors wire up different adapter implementations (live, seeded,
/// recording, replaying).
pub struct ServiceContext {
    /// Source of randomness for the draw.
    pub entropy: Box<dyn Entropy>,
    /// Clock for timestamps and the optional time limit.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// OS-seeded randomness and the system clock.
    #[must_use]
    pub fn live() -> Self {
        Self { entropy: Box::new(LiveEntropy::new()), clock: Box::new(LiveClock) }
    }

    /// Reproducible randomness from `seed` and the system clock.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { entropy: Box::new(SeededEntropy::new(seed)), clock: Box::new(LiveClock) }
    }

    /// Wraps `base` so every call is captured by `session`.
    ///
    /// Drop the returned context before calling `session.finish()`.
    #[must_use]
    pub fn recording(base: Self, session: &RecordingSession) -> Self {
        Self {
            entropy: Box::new(RecordingEntropy::new(base.entropy, Arc::clone(&session.entropy))),
            clock: Box::new(RecordingClock::new(base.clock, Arc::clone(&session.clock))),
        }
    }

    /// Replays the cassettes a recording session left in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory holds no entropy cassette or a
    /// cassette cannot be parsed.
    pub fn replaying(dir: &Path) -> Result<Self, String> {
        Self::replaying_from(&CassetteConfig::from_dir(dir)?)
    }

    /// Replays from explicit per-port cassettes.
    ///
    /// Ports without a cassette get a panicking adapter that fails with a
    /// clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            entropy: match replayers.entropy {
                Some(r) => Box::new(ReplayingEntropy::new(r)),
                None => Box::new(PanickingEntropy),
            },
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
        })
    }
}

// --- Panicking adapters for ports without a cassette ---

struct PanickingEntropy;
impl Entropy for PanickingEntropy {
    fn index_below(&self, _bound: usize) -> usize {
        panic!("Entropy port not configured in CassetteConfig: no cassette loaded for entropy");
    }
    fn unit(&self) -> f64 {
        panic!("Entropy port not configured in CassetteConfig: no cassette loaded for entropy");
    }
}

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}
