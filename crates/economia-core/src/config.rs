//! Persisted application configuration.
//!
//! The shell only reads and writes the `theme` key. Every other key in the
//! document is kept in a flattened table so that pages owning those keys
//! never lose them when the shell saves a correction.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::theme::DEFAULT_THEME;

/// The persisted key-value document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Active theme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Keys owned by other parts of the application
    #[serde(flatten)]
    pub extra: toml::Table,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            extra: toml::Table::new(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes to a TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load/save access to the config document.
///
/// Injected into the shell instead of being reached through a global so
/// that startup can be tested against an in-memory store.
pub trait ConfigStore: Send + Sync {
    /// Loads the document. A store with nothing saved yet yields the default.
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replaces the stored document.
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// TOML file on disk.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default config path.
    pub fn default_location() -> Result<Self, ConfigError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("economia").join("config.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the config file, where sibling files such as the
    /// custom theme definitions live.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        AppConfig::from_toml(&content)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, config.to_toml()?)?;
        tracing::debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

/// In-memory store. Counts saves so callers can check that a correction
/// was persisted.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<Option<AppConfig>>,
    saves: AtomicUsize,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Mutex::new(Some(config)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let guard = self.config.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let mut guard = self.config.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(config.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, "solar");
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_missing_theme_key_defaults() {
        let config = AppConfig::from_toml("currency = \"EUR\"\n").unwrap();
        assert_eq!(config.theme, "solar");
        assert_eq!(config.extra["currency"].as_str(), Some("EUR"));
    }

    #[test]
    fn test_unrelated_keys_survive_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "theme = \"darkly\"\ncurrency = \"EUR\"\n\n[database]\npath = \"economia.db\"\n",
        )
        .unwrap();

        let store = FileConfigStore::new(&path);
        let mut config = store.load().unwrap();
        assert_eq!(config.theme, "darkly");

        config.theme = "flatly".to_string();
        store.save(&config).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.theme, "flatly");
        assert_eq!(reloaded.extra["currency"].as_str(), Some("EUR"));
        assert_eq!(
            reloaded.extra["database"]["path"].as_str(),
            Some("economia.db")
        );
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().join("nested").join("config.toml"));
        assert_eq!(store.load().unwrap(), AppConfig::default());

        store.save(&AppConfig::default()).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.dir(), dir.path().join("nested"));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemoryConfigStore::new();
        assert_eq!(store.load().unwrap().theme, "solar");

        let config = AppConfig {
            theme: "cyborg".to_string(),
            ..AppConfig::default()
        };
        store.save(&config).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().theme, "cyborg");
    }
}
