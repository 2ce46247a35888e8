//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/ghpulse/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/ghpulse/` (~/.config/ghpulse/)
//! - State/Logs: `$XDG_STATE_HOME/ghpulse/` (~/.local/state/ghpulse/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Backend API connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard presentation options
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
///
/// The backend is a proxy/cache in front of GitHub; ghpulse only reads JSON from it.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., `http://localhost:8080`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(Error::Config("api.base_url must not be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api.base_url must start with http:// or https:// (got {})",
                url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Dashboard presentation options
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Number of locked achievements shown as "next goals"
    #[serde(default = "default_next_goals")]
    pub next_goals: usize,

    /// Number of languages listed in the language usage section
    #[serde(default = "default_top_languages")]
    pub top_languages: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            next_goals: default_next_goals(),
            top_languages: default_top_languages(),
        }
    }
}

fn default_next_goals() -> usize {
    3
}

fn default_top_languages() -> usize {
    10
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.api.validate()?;
        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/ghpulse/config.toml` (~/.config/ghpulse/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("ghpulse").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/ghpulse/` (~/.local/state/ghpulse/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("ghpulse")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/ghpulse/ghpulse.log` (~/.local/state/ghpulse/ghpulse.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("ghpulse.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.dashboard.next_goals, 3);
        assert_eq!(config.logging.level, "info");
        assert!(config.api.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[api]
base_url = "https://pulse.example.com"
timeout_secs = 5

[dashboard]
next_goals = 5

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.api.base_url, "https://pulse.example.com");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.dashboard.next_goals, 5);
        assert_eq!(config.dashboard.top_languages, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_api_config_validation() {
        let config = ApiConfig {
            base_url: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://127.0.0.1:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
