use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use log::{debug, warn};

use crate::errors::AppError;

// Application configuration module
// Handles loading, environment overrides and validation of the settings
// needed to reach the content API.

/// Environment variable holding the content API base URL
pub const BASE_URL_ENV: &str = "CLINIC_API_BASE_URL";

/// Environment variable overriding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "CLINIC_API_TIMEOUT_SECS";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Content API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Locale used when none is given on the command line
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Content API connection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the content API, e.g. `https://cms.example.com`
    #[serde(default = "String::new")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_locale() -> String {
    crate::i18n::PRIMARY_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig::default(),
            default_locale: default_locale(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Layer process environment overrides on top of the loaded values
    pub fn apply_env(mut self) -> Self {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                self.api.base_url = base_url.trim().to_string();
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid {} value: {}", TIMEOUT_ENV, raw),
            }
        }

        self
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api.timeout_secs == 0 {
            return Err(AppError::Config("API timeout must be greater than zero".to_string()));
        }

        if self.api.base_url.is_empty() {
            // Requests will fail into the absent path, which callers render as not found
            warn!("No content API base URL configured (set {})", BASE_URL_ENV);
        } else if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(AppError::Config(format!(
                "Invalid API base URL '{}': {}",
                self.api.base_url, e
            )));
        }

        Ok(())
    }
}
