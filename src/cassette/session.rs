//! A recording session: one cassette per port in a single directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::config::{CLOCK_CASSETTE, DRAW_META, ENTROPY_CASSETTE};
use super::format::DrawMeta;
use super::recorder::CassetteRecorder;

/// Per-port recorders sharing one output directory.
///
/// Recording adapters hold clones of the `Arc`s; drop them (by dropping the
/// `ServiceContext`) before calling [`finish`](Self::finish).
pub struct RecordingSession {
    /// Recorder for entropy draws.
    pub entropy: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for clock readings.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    meta: Option<DrawMeta>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` already holds cassettes or cannot be created.
    pub fn new(dir: &Path) -> Result<Self, String> {
        for file in [ENTROPY_CASSETTE, CLOCK_CASSETTE, DRAW_META] {
            if dir.join(file).exists() {
                return Err(format!(
                    "Cassette {} already exists; choose an empty directory",
                    dir.join(file).display()
                ));
            }
        }
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create cassette directory {}: {e}", dir.display()))?;

        let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let make_recorder = |file: &str, port: &str| {
            Arc::new(Mutex::new(CassetteRecorder::new(dir.join(file), format!("{stamp}-{port}"))))
        };

        Ok(Self {
            entropy: make_recorder(ENTROPY_CASSETTE, "entropy"),
            clock: make_recorder(CLOCK_CASSETTE, "clock"),
            meta: None,
            output_dir: dir.to_path_buf(),
        })
    }

    /// Saves the draw request with the cassettes so a replay can check it.
    pub fn describe(&mut self, meta: DrawMeta) {
        self.meta = Some(meta);
    }

    /// Writes every cassette and returns the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.entropy, "entropy")?;
        finish_one(self.clock, "clock")?;
        if let Some(meta) = &self.meta {
            let path = self.output_dir.join(DRAW_META);
            let yaml = serde_yaml::to_string(meta)
                .map_err(|e| format!("Failed to serialize draw request: {e}"))?;
            std::fs::write(&path, yaml)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        }
        Ok(self.output_dir)
    }
}
