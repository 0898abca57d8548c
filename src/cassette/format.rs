//! Cassette data structures for recording and replaying interactions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name, e.g. "clock".
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was written, in UTC.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if `yaml` is not a valid cassette document.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_cassette() {
        let yaml = r#"
name: handwritten
recorded_at: 2015-12-12T23:00:00Z
interactions:
  - seq: 0
    port: clock
    method: now
    input: {}
    output: "2015-12-12T23:00:00"
"#;
        let cassette = Cassette::from_yaml(yaml).unwrap();
        assert_eq!(cassette.name, "handwritten");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].output, json!("2015-12-12T23:00:00"));
    }

    #[test]
    fn rejects_cassette_without_interactions_field() {
        let err = Cassette::from_yaml("name: x\nrecorded_at: 2015-12-12T23:00:00Z\n").unwrap_err();
        assert!(err.contains("interactions"));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("stamp_format_missing.cassette.yaml");
        let err = Cassette::load(&path).unwrap_err();
        assert!(err.starts_with("Failed to read cassette file"));
    }

    #[test]
    fn load_reports_unparseable_file() {
        let dir = std::env::temp_dir().join("stamp_format_bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.cassette.yaml");
        std::fs::write(&path, "not: [a cassette").unwrap();

        let err = Cassette::load(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse cassette file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
