//! Editor session configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the reorder engine keeps a title block at the head of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PinPolicy {
    /// Re-pin on every reorder. A non-title drop onto the head slot cannot
    /// displace the title.
    #[default]
    Enforce,
    /// Only a dragged title is moved to the head; other drags are plain
    /// splices.
    DraggedOnly,
}

/// Configuration for a form editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Title pinning behaviour during drag reorders
    pub pin_policy: PinPolicy,
    /// Clear the pending input after a block is created
    pub reset_pending_on_create: bool,
}

impl EditorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            pin_policy: PinPolicy::Enforce,
            reset_pending_on_create: true,
        }
    }

    /// Set the pin policy
    pub fn with_pin_policy(mut self, policy: PinPolicy) -> Self {
        self.pin_policy = policy;
        self
    }

    /// Set whether pending input is reset after a successful create
    pub fn with_reset_pending_on_create(mut self, reset: bool) -> Self {
        self.reset_pending_on_create = reset;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid editor configuration JSON")
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read editor configuration {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to load editor configuration {}", path.display()))
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_configuration_builder() {
        let config = EditorConfig::new()
            .with_pin_policy(PinPolicy::DraggedOnly)
            .with_reset_pending_on_create(false);
        assert_eq!(config.pin_policy, PinPolicy::DraggedOnly);
        assert!(!config.reset_pending_on_create);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json_str(r#"{"pinPolicy":"draggedOnly"}"#).unwrap();
        assert_eq!(config.pin_policy, PinPolicy::DraggedOnly);
        assert!(config.reset_pending_on_create);

        let empty = EditorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, EditorConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(EditorConfig::from_json_str(r#"{"maxBlocks":3}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resetPendingOnCreate": false}}"#).unwrap();
        let config = EditorConfig::from_json_file(file.path()).unwrap();
        assert!(!config.reset_pending_on_create);
        assert_eq!(config.pin_policy, PinPolicy::Enforce);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = EditorConfig::from_json_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.json"));
    }
}
