//! Durable session and settings store
//!
//! One flat config file holds everything that must survive between
//! invocations: the server URL, the session token and user id, and the
//! presentation settings. Loading an absent file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use taskflow_core::{Language, Theme};

use crate::error::Result;

pub const APP_NAME: &str = "taskflow";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub theme: Theme,
    pub desktop_notifications: bool,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: None,
            user_id: None,
            theme: Theme::default(),
            desktop_notifications: false,
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    /// Drop the session fields, keeping settings intact.
    pub fn clear_session(&mut self) {
        self.token = None;
        self.user_id = None;
    }
}

/// Path-addressed config storage adapter
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a storage adapter for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage adapter at the platform's standard config location
    pub fn default_location() -> Result<Self> {
        let path = confy::get_configuration_file_path(APP_NAME, None)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        Ok(confy::load_path(&self.path)?)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        Ok(confy::store_path(&self.path, config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_documented_contract() {
        let config = Config::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert!(config.token.is_none());
        assert!(config.user_id.is_none());
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, Language::Ru);
        assert!(!config.desktop_notifications);
    }

    #[test]
    fn test_roundtrip_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("taskflow.toml"));

        let mut config = Config::default();
        config.token = Some("tok-123".to_string());
        config.user_id = Some(42);
        config.language = Language::En;
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("tok-123"));
        assert_eq!(loaded.user_id, Some(42));
        assert_eq!(loaded.language, Language::En);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("absent.toml"));

        let config = store.load().unwrap();
        assert!(!config.has_session());
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_clear_session_keeps_settings() {
        let mut config = Config {
            token: Some("t".into()),
            user_id: Some(1),
            language: Language::En,
            ..Config::default()
        };
        config.clear_session();
        assert!(!config.has_session());
        assert!(config.user_id.is_none());
        assert_eq!(config.language, Language::En);
    }
}
