//! Configuration management for the weather gateway
//!
//! Settings are layered: built-in defaults, an optional TOML file, then
//! `WEATHER_API__*` environment variables, then `OPENWEATHER_API_KEY`.
//! A `.env` file in the working directory may supply any of these variables;
//! see [`load_dotenv`].
//! The configuration is loaded once at startup and handed to the components
//! that need it; nothing reads the environment after that.

use crate::ApiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Value shipped in example `.env` files; treated as "no key configured"
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Conventional environment variable for the provider credential
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Dotenv file read from the working directory at startup
pub const DOTENV_FILE: &str = ".env";

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "WEATHER_API_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "weather-api.toml";
const ENV_PREFIX: &str = "WEATHER_API";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Upstream provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OpenWeatherMap provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider credential, sent as `appid`
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Base URL; the client appends `/data/2.5/...` and `/geo/1.0/...`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public base URL used in the example links of `/api/test`
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_public_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: default_public_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ProviderConfig {
    /// True when the credential is unset or still the shipped placeholder.
    ///
    /// This is a startup diagnostic, not a configuration error: the server
    /// still starts and the provider answers 401, which surfaces as a
    /// transport failure on the API.
    #[must_use]
    pub fn has_placeholder_key(&self) -> bool {
        let key = self.api_key.trim();
        key.is_empty() || key == PLACEHOLDER_API_KEY
    }
}

impl ServerConfig {
    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Export the variables of a dotenv file into the process environment.
///
/// Variables already present in the environment keep their value. Returns
/// `false` when the file does not exist.
pub fn load_dotenv(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

impl WeatherApiConfig {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_path(env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    /// Load configuration, reading the TOML file at `config_path` if it exists
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        // WEATHER_API__SERVER__PORT=8080 style overrides
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder = builder
            .set_override_option("provider.api_key", env::var(API_KEY_ENV).ok())
            .with_context(|| format!("Failed to apply {API_KEY_ENV}"))?;

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherApiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> crate::Result<()> {
        if self.provider.timeout_seconds == 0 {
            return Err(ApiError::config(
                "Provider timeout must be at least 1 second",
            ));
        }

        if self.provider.timeout_seconds > 300 {
            return Err(ApiError::config(
                "Provider timeout cannot exceed 300 seconds",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ApiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ApiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        let base_url = &self.provider.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::config(
                "Provider base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        Ok(())
    }
}
