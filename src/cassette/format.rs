//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name (`"llm"` or `"kv"`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments passed to the port.
    pub input: serde_json::Value,
    /// Value returned by the port, using the `{"ok": ..}` / `{"err": ..}` convention
    /// for fallible methods.
    pub output: serde_json::Value,
}

/// A named, ordered list of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name.
    pub name: String,
    /// When the recording was made.
    pub recorded_at: DateTime<Utc>,
    /// Version of tripweaver that produced the recording.
    #[serde(default)]
    pub tool_version: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yaml_preserves_interaction_payloads() {
        let cassette = Cassette {
            name: "goa".into(),
            recorded_at: Utc::now(),
            tool_version: "0.1.0".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "kv".into(),
                    method: "get".into(),
                    input: json!({"key": "history"}),
                    output: json!({"ok": null}),
                },
                Interaction {
                    seq: 1,
                    port: "llm".into(),
                    method: "complete".into(),
                    input: json!({"model": "gemini-2.5-flash"}),
                    output: json!({"ok": {"text": "{}"}}),
                },
            ],
        };
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let back: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back.interactions[0].output, json!({"ok": null}));
        assert_eq!(back, cassette);
    }

    #[test]
    fn tool_version_is_optional() {
        let yaml = "name: old\nrecorded_at: 2024-01-01T00:00:00Z\ninteractions: []\n";
        let cassette: Cassette = serde_yaml::from_str(yaml).unwrap();
        assert!(cassette.tool_version.is_empty());
    }
}
