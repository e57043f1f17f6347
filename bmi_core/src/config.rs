//! Configuration file support for the BMI calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bmi/config.toml`.
//! Every field is optional; missing values fall back to defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub share: ShareConfig,
}

/// Result notification settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Delay between the calculation and the notification firing
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            delay_ms: default_delay_ms(),
            title: default_title(),
        }
    }
}

impl NotificationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Share sheet settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

// Default value functions
fn default_enabled() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_title() -> String {
    "BMI Result".into()
}

/// Notifications further out than this are almost certainly a typo
const MAX_DELAY_MS: u64 = 24 * 60 * 60 * 1000;

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Check values that parse fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.notification.title.trim().is_empty() {
            return Err(Error::Config("notification.title must not be empty".into()));
        }
        if self.share.title.trim().is_empty() {
            return Err(Error::Config("share.title must not be empty".into()));
        }
        if self.notification.delay_ms > MAX_DELAY_MS {
            return Err(Error::Config(format!(
                "notification.delay_ms must be at most {} (got {})",
                MAX_DELAY_MS, self.notification.delay_ms
            )));
        }
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("bmi").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.notification.enabled);
        assert_eq!(config.notification.delay_ms, 1000);
        assert_eq!(config.notification.delay(), Duration::from_secs(1));
        assert_eq!(config.share.title, "BMI Result");
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[notification]
delay_ms = 0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notification.delay_ms, 0);
        assert!(config.notification.enabled); // default
        assert_eq!(config.notification.title, "BMI Result"); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.notification.enabled = false;
        config.share.title = "My BMI".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.notification.enabled);
        assert_eq!(loaded.share.title, "My BMI");
    }

    #[test]
    fn test_empty_title_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[share]\ntitle = \"  \"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let mut config = Config::default();
        config.notification.delay_ms = MAX_DELAY_MS + 1;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[notification\nenabled = yes").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
