//! On-disk cassette layout.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::DRAW_META;
use crate::derangement::Strategy;

/// A single call made through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name (`entropy` or `clock`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Value the port returned.
    pub output: serde_json::Value,
}

/// An ordered recording of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name.
    pub name: String,
    /// When the recording was written.
    pub recorded_at: DateTime<Utc>,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid cassette.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

/// The request a recorded draw answered.
///
/// Entropy draws only make sense for the participants and strategy they
/// were recorded with, so a replay compares against this first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawMeta {
    /// Validated participant names, in input order.
    pub participants: Vec<String>,
    /// Strategy the draw used.
    pub strategy: Strategy,
}

impl DrawMeta {
    /// Reads the draw request from a recording directory, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, String> {
        let path = dir.join(DRAW_META);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
    }

    /// Describes how `requested` differs from this recording, or `None`
    /// when a replay can serve it.
    #[must_use]
    pub fn mismatch(&self, requested: &Self) -> Option<String> {
        let mut problems = Vec::new();
        if self.participants != requested.participants {
            problems.push(format!(
                "recorded participants [{}], requested [{}]",
                self.participants.join(", "),
                requested.participants.join(", ")
            ));
        }
        if self.strategy != requested.strategy {
            problems.push(format!(
                "recorded {} strategy, requested {}",
                self.strategy, requested.strategy
            ));
        }
        (!problems.is_empty()).then(|| problems.join("; "))
    }
}
