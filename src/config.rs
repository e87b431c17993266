//! Tracker configuration.
//!
//! Multiple trackers may coexist under dependency injection, so each carries
//! a name that appears as a field on every log event. Configuration can be
//! loaded from a JSON file; a missing file falls back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ResultExt, TrackerError};

/// Default instance name used when none is configured
pub const DEFAULT_TRACKER_NAME: &str = "screen-stack";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Instance name carried on every log event
    #[serde(default = "default_name")]
    pub name: String,
    /// Whether the no-op lifecycle stages (started, resumed, paused, stopped,
    /// save_state) are logged at debug level
    #[serde(default = "default_log_transitions", rename = "logTransitions")]
    pub log_transitions: bool,
}

fn default_name() -> String {
    DEFAULT_TRACKER_NAME.to_string()
}

fn default_log_transitions() -> bool {
    true
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            name: default_name(),
            log_transitions: default_log_transitions(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file is not an error: defaults are returned. An unreadable
    /// or unparseable file is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Tracker config not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| TrackerError::ConfigLoad {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: TrackerConfig = serde_json::from_str(&contents)?;
        info!(path = %path.display(), name = %config.name, "Loaded tracker config");
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).warn_on_err().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.name, DEFAULT_TRACKER_NAME);
        assert!(config.log_transitions);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = TrackerConfig::load(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(config.name, DEFAULT_TRACKER_NAME);
    }

    #[test]
    fn test_load_partial_json_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"name": "launcher"}"#).unwrap();

        let config = TrackerConfig::load(&path).unwrap();
        assert_eq!(config.name, "launcher");
        assert!(config.log_transitions);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = TrackerConfig::load(&path).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigParse(_)));
    }

    #[test]
    fn test_load_or_default_swallows_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let config = TrackerConfig::load_or_default(&path);
        assert_eq!(config.name, DEFAULT_TRACKER_NAME);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = TrackerConfig {
            name: "launcher".to_string(),
            log_transitions: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("logTransitions"));

        let parsed: TrackerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "launcher");
        assert!(!parsed.log_transitions);
    }
}
