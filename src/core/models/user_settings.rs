use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants::{self, LOG_TAG_SETTINGS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub api_base_url: String,
    pub api_key: String,
    pub search_debounce_millis: u64,
    pub request_timeout_secs: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: global_constants::DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            search_debounce_millis: global_constants::SEARCH_DEBOUNCE_MILLIS,
            request_timeout_secs: global_constants::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Ok(Self::load_from(&settings_path)?.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_key) = std::env::var(global_constants::API_KEY_ENV_VAR) {
            log::info!(
                "{} Using API key from {}",
                LOG_TAG_SETTINGS,
                global_constants::API_KEY_ENV_VAR
            );
            self.api_key = api_key;
        }

        if self.api_key.trim().is_empty() {
            log::warn!(
                "{} No API key configured, requests will be rejected by the server",
                LOG_TAG_SETTINGS
            );
        }

        self
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("{} No settings file found, using defaults", LOG_TAG_SETTINGS);
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid settings file {:?}", settings_path))?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!("{} API base URL: {}", LOG_TAG_SETTINGS, settings.api_base_url);
        log::debug!(
            "{} Debounce window: {}ms",
            LOG_TAG_SETTINGS,
            settings.search_debounce_millis
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(settings_path, contents)?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    pub fn debounce_period(&self) -> Duration {
        Duration::from_millis(self.search_debounce_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.api_base_url, global_constants::DEFAULT_API_BASE_URL);
        assert!(settings.api_key.is_empty());
        assert_eq!(settings.search_debounce_millis, 1000);
        assert_eq!(settings.debounce_period(), Duration::from_millis(1000));
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_fields() {
        let json = r#"{ "api_key": "secret" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.api_base_url, global_constants::DEFAULT_API_BASE_URL);
        assert_eq!(
            settings.search_debounce_millis,
            global_constants::SEARCH_DEBOUNCE_MILLIS
        );
    }

    #[test]
    fn test_load_from_missing_file_writes_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("nested").join("settings.json");

        let settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(settings_path.exists());
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let original_settings = UserSettings {
            api_base_url: "http://127.0.0.1:8080/v1/".to_string(),
            api_key: "test-key".to_string(),
            search_debounce_millis: 250,
            request_timeout_secs: 3,
        };

        original_settings.save_to(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, "{ not json").unwrap();

        let result = UserSettings::load_from(&settings_path);

        assert!(result.is_err());
    }
}
