//! `weather-api` - Weather and geocoding gateway for browser frontends
//!
//! This library forwards requests to `OpenWeatherMap`, reshapes the provider
//! payloads into a small frontend-friendly schema, and classifies failures
//! into uniform JSON error bodies.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::{LoggingConfig, ProviderConfig, ServerConfig, WeatherApiConfig};
pub use error::{ApiError, ErrorBody, ProviderError};
pub use models::{ForecastReport, LocationMatch, LocationQuery, Units, WeatherReport};
pub use weather::{OpenWeatherClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ApiError>;
