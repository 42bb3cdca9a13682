use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{AssistantError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the assistant, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Where the address book is stored. Defaults to the platform data dir.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// How many days ahead `birthdays` looks by default
    #[serde(default = "default_window")]
    pub birthday_window_days: i64,

    /// Re-add a `0000000000` placeholder after `remove_phone`
    #[serde(default)]
    pub placeholder_phone_on_remove: bool,
}

fn default_window() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            placeholder_phone_on_remove: false,
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AssistantError::Io)?;
        let mut config: AssistantConfig =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        if config.birthday_window_days < 1 {
            warn!(
                "birthday_window_days must be at least 1, got {}; using {}",
                config.birthday_window_days, DEFAULT_WINDOW_DAYS
            );
            config.birthday_window_days = DEFAULT_WINDOW_DAYS;
        }
        Ok(config)
    }

    /// Resolve the data file: explicit override, then config, then `default`.
    pub fn resolve_data_file(&self, override_path: Option<PathBuf>, default: PathBuf) -> PathBuf {
        override_path
            .or_else(|| self.data_file.clone())
            .unwrap_or(default)
    }
}

/// Per-session settings the command layer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub birthday_window_days: i64,
    pub placeholder_phone_on_remove: bool,
}

impl Default for Settings {
    fn default() -> Self {
        AssistantConfig::default().settings()
    }
}

impl AssistantConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            birthday_window_days: self.birthday_window_days,
            placeholder_phone_on_remove: self.placeholder_phone_on_remove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.birthday_window_days, 7);
        assert!(config.data_file.is_none());
        assert!(!config.placeholder_phone_on_remove);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{
                "data_file": "/tmp/book.json",
                "birthday_window_days": 14,
                "placeholder_phone_on_remove": true
            }"#,
        )
        .unwrap();

        let loaded = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            AssistantConfig {
                data_file: Some(PathBuf::from("/tmp/book.json")),
                birthday_window_days: 14,
                placeholder_phone_on_remove: true,
            }
        );
    }

    #[test]
    fn test_non_positive_window_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        for window in ["0", "-3"] {
            fs::write(
                dir.path().join(CONFIG_FILENAME),
                format!(r#"{{"birthday_window_days": {}}}"#, window),
            )
            .unwrap();
            let loaded = AssistantConfig::load(dir.path()).unwrap();
            assert_eq!(loaded.birthday_window_days, DEFAULT_WINDOW_DAYS);
        }
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            AssistantConfig::load(dir.path()),
            Err(AssistantError::Serialization(_))
        ));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"placeholder_phone_on_remove": true}"#,
        )
        .unwrap();
        let loaded = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.birthday_window_days, 7);
        assert!(loaded.placeholder_phone_on_remove);
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let default = PathBuf::from("default.json");
        let mut config = AssistantConfig::default();
        assert_eq!(config.resolve_data_file(None, default.clone()), default);

        config.data_file = Some(PathBuf::from("configured.json"));
        assert_eq!(
            config.resolve_data_file(None, default.clone()),
            PathBuf::from("configured.json")
        );
        assert_eq!(
            config.resolve_data_file(Some(PathBuf::from("flag.json")), default),
            PathBuf::from("flag.json")
        );
    }
}
