//! Exported draw files.
//!
//! A draw can be written to disk so it can be revealed one giver at a time
//! later. JSON is used for `.json` paths, YAML for everything else.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::derangement::{Assignment, Strategy};

/// A finished draw plus how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// When the draw happened.
    pub drawn_at: DateTime<Utc>,
    /// Strategy that produced it.
    pub strategy: Strategy,
    /// Candidates generated, including the accepted one.
    pub attempts: u32,
    /// The pairs, validated on load.
    pub pairs: Assignment,
}

/// Serialization format of a draw file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `serde_json`, pretty-printed.
    Json,
    /// `serde_yaml`.
    Yaml,
}

impl FileFormat {
    /// Picks the format from the file extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl DrawRecord {
    /// Serializes the record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self, format: FileFormat) -> Result<String, String> {
        match format {
            FileFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| format!("Failed to serialize draw as JSON: {e}")),
            FileFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| format!("Failed to serialize draw as YAML: {e}")),
        }
    }

    /// Writes the record to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let contents = self.render(FileFormat::for_path(path))?;
        std::fs::write(path, contents)
            .map_err(|e| format!("Failed to write draw file {}: {e}", path.display()))
    }

    /// Reads a record from `path`, validating the assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// pairs are not a valid derangement.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read draw file {}: {e}", path.display()))?;
        match FileFormat::for_path(path) {
            FileFormat::Json => serde_json::from_str(&contents)
                .map_err(|e| format!("Invalid draw file {}: {e}", path.display())),
            FileFormat::Yaml => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Invalid draw file {}: {e}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::entropy::SeededEntropy;
    use crate::derangement::{self, Participants};

    fn sample() -> DrawRecord {
        let names = Participants::parse(&["Ann", "Bob", "Cy"]).unwrap();
        DrawRecord {
            drawn_at: "2025-12-01T18:00:00Z".parse().unwrap(),
            strategy: Strategy::Rejection,
            attempts: 2,
            pairs: derangement::generate(&names, &SeededEntropy::new(4)).unwrap(),
        }
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(FileFormat::for_path(Path::new("draw.json")), FileFormat::Json);
        assert_eq!(FileFormat::for_path(Path::new("DRAW.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::for_path(Path::new("draw.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::for_path(Path::new("draw")), FileFormat::Yaml);
    }

    #[test]
    fn saves_and_loads_both_formats() {
        let dir = std::env::temp_dir().join("giftdraw_export_test");
        std::fs::create_dir_all(&dir).unwrap();
        let record = sample();

        for file in ["draw.json", "draw.yaml"] {
            let path = dir.join(file);
            record.save(&path).unwrap();
            assert_eq!(DrawRecord::load(&path).unwrap(), record, "{file}");
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn yaml_layout_is_readable() {
        let yaml = sample().render(FileFormat::Yaml).unwrap();
        assert!(yaml.contains("strategy: rejection"));
        assert!(yaml.contains("attempts: 2"));
        assert!(yaml.contains("- giver: Ann"));
    }

    #[test]
    fn load_rejects_tampered_pairs() {
        let dir = std::env::temp_dir().join("giftdraw_export_tampered_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("draw.yaml");
        std::fs::write(
            &path,
            "drawn_at: 2025-12-01T18:00:00Z\nstrategy: direct\nattempts: 1\npairs:\n\
             - giver: Ann\n  receiver: Ann\n- giver: Bob\n  receiver: Bob\n",
        )
        .unwrap();

        let err = DrawRecord::load(&path).unwrap_err();
        assert!(err.contains("assigned to themselves"), "{err}");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
