//! Locating per-port cassettes for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// File name of the entropy cassette inside a recording directory.
pub const ENTROPY_CASSETTE: &str = "entropy.cassette.yaml";
/// File name of the clock cassette inside a recording directory.
pub const CLOCK_CASSETTE: &str = "clock.cassette.yaml";
/// File name of the draw request recorded alongside the cassettes.
pub const DRAW_META: &str = "draw.meta.yaml";

/// Per-port cassette paths. A port without a path falls back to a panicking
/// adapter during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the entropy cassette.
    pub entropy: Option<PathBuf>,
    /// Path to the clock cassette.
    pub clock: Option<PathBuf>,
}

/// Loaded replayers, one per configured port.
pub struct PortReplayers {
    /// Replayer for the entropy port.
    pub entropy: Option<CassetteReplayer>,
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Picks up whichever cassettes a recording session left in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` holds no entropy cassette; a replay
    /// without recorded draws cannot reproduce anything.
    pub fn from_dir(dir: &Path) -> Result<Self, String> {
        let entropy = dir.join(ENTROPY_CASSETTE);
        if !entropy.exists() {
            return Err(format!("No {ENTROPY_CASSETTE} found in {}", dir.display()));
        }
        let clock = dir.join(CLOCK_CASSETTE);
        Ok(Self { entropy: Some(entropy), clock: clock.exists().then_some(clock) })
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &Path| Cassette::load(path).map(|c| CassetteReplayer::new(&c));
        Ok(PortReplayers {
            entropy: self.entropy.as_deref().map(load).transpose()?,
            clock: self.clock.as_deref().map(load).transpose()?,
        })
    }
}
