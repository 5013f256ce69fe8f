//! Data models for the weather gateway
//!
//! Request inputs and the frontend-facing response schema, organized by concern:
//! - Location: query parameters, units, and geocoding matches
//! - Weather: the current-conditions report
//! - Forecast: the short-range forecast report

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{FORECAST_ENTRY_LIMIT, ForecastDetails, ForecastEntry, ForecastLocation, ForecastReport};
pub use location::{CoordinateQuery, LocationMatch, LocationQuery, Units};
pub use weather::{Condition, Coordinates, ReportLocation, SystemInfo, TemperatureBlock, WeatherDetails, WeatherReport};
