//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - File names of the habit and session data
//! - Date display format and default output mode
//! - Log level
//!
//! Configuration is stored at `~/.config/habitrack/config.toml`.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Where the data files live, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_habits_file")]
    pub habits_file: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// strftime pattern for the date header.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Print JSON instead of text by default.
    #[serde(default)]
    pub json_output: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitrack/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter when `HABITRACK_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_habits_file() -> String {
    "habits.json".into()
}
fn default_session_file() -> String {
    "session.json".into()
}
fn default_date_format() -> String {
    "%d/%m/%Y (%a)".into()
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            habits_file: default_habits_file(),
            session_file: default_session_file(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            json_output: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            storage: StorageConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    const FILE_NAME: &'static str = "config.toml";

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot replace a whole section".to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Path of the config file inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(Self::FILE_NAME)
    }

    /// Load from `dir`, writing defaults when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk.
    pub fn load_in(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_in(dir)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path,
                message: err.to_string(),
            }),
        }
    }

    /// Persist to `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_in(&self, dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path_in(dir);
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from `dir`, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default(dir: &Path) -> Self {
        Self::load_in(dir).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default configuration");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is not valid for
    /// it. The config is left unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                key: "display.date_format".into(),
                message: format!("'{}' is not a valid date format", self.display.date_format),
            });
        }
        for (key, name) in [
            ("storage.habits_file", &self.storage.habits_file),
            ("storage.session_file", &self.storage.session_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: "file name cannot be empty".into(),
                });
            }
        }
        Ok(())
    }

    pub fn habits_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.storage.habits_file)
    }

    pub fn session_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.storage.session_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.storage.habits_file, "habits.json");
        assert_eq!(cfg.storage.session_file, "session.json");
        assert_eq!(cfg.display.date_format, "%d/%m/%Y (%a)");
        assert!(!cfg.display.json_output);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("log_level = \"debug\"\n[display]\njson_output = true\n").unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.display.json_output);
        assert_eq!(cfg.display.date_format, "%d/%m/%Y (%a)");
        assert_eq!(cfg.storage.habits_file, "habits.json");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("display.json_output").as_deref(), Some("false"));
        assert_eq!(cfg.get("storage.habits_file").as_deref(), Some("habits.json"));
        assert_eq!(cfg.get("log_level").as_deref(), Some("warn"));
        assert!(cfg.get("display.missing_key").is_none());
        assert!(cfg.get("display").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_bool_and_string() {
        let mut cfg = Config::default();
        cfg.set("display.json_output", "true").unwrap();
        cfg.set("storage.habits_file", "mine.json").unwrap();
        assert!(cfg.display.json_output);
        assert_eq!(cfg.storage.habits_file, "mine.json");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(cfg.set("display.nonexistent_key", "x"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(cfg.set("", "x"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        let result = cfg.set("display.json_output", "not_a_bool");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert!(!cfg.display.json_output);
    }

    #[test]
    fn set_rejects_bad_date_format_and_keeps_old_value() {
        let mut cfg = Config::default();
        assert!(cfg.set("display.date_format", "%Q").is_err());
        assert_eq!(cfg.display.date_format, "%d/%m/%Y (%a)");
        cfg.set("display.date_format", "%Y-%m-%d").unwrap();
        assert_eq!(cfg.display.date_format, "%Y-%m-%d");
    }

    #[test]
    fn set_rejects_empty_file_name() {
        let mut cfg = Config::default();
        assert!(cfg.set("storage.session_file", " ").is_err());
    }

    #[test]
    fn load_writes_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = Config::load_in(temp_dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(Config::path_in(temp_dir.path()).exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.set("log_level", "debug").unwrap();
        cfg.save_in(temp_dir.path()).unwrap();
        assert_eq!(Config::load_in(temp_dir.path()).unwrap().log_level, "debug");
    }

    #[test]
    fn unparseable_file_is_an_error_but_load_or_default_recovers() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(Config::path_in(temp_dir.path()), "[display\n").unwrap();
        assert!(matches!(Config::load_in(temp_dir.path()), Err(ConfigError::ParseFailed(_))));
        assert_eq!(Config::load_or_default(temp_dir.path()), Config::default());
    }

    #[test]
    fn data_paths_join_the_data_dir() {
        let cfg = Config::default();
        let dir = Path::new("/data");
        assert_eq!(cfg.habits_path(dir), PathBuf::from("/data/habits.json"));
        assert_eq!(cfg.session_path(dir), PathBuf::from("/data/session.json"));
    }
}
