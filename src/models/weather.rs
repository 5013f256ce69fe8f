//! Current-conditions report returned by `/api/weather/current`

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Simplified current weather for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: ReportLocation,
    pub temperature: TemperatureBlock,
    pub weather: Condition,
    pub details: WeatherDetails,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLocation {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Temperatures rounded to one decimal, with a display unit label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBlock {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
    /// `°C` for metric requests, `°F` for everything else
    pub unit: String,
}

/// Weather condition, shared by current and forecast reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
    /// Provider icon code, e.g. `10n`
    pub icon: String,
    /// Frontend icon symbol, e.g. `cloud-rain`
    pub icon_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDetails {
    /// Relative humidity in percent
    pub humidity: Number,
    /// Pressure in hPa
    pub pressure: Number,
    pub wind_speed: f64,
    /// Wind direction in degrees, 0 when the provider omits it
    pub wind_deg: Number,
    /// Cloud cover in percent
    pub cloudiness: Number,
    /// Kilometers for metric requests, miles otherwise
    pub visibility: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Unix timestamp (seconds)
    pub sunrise: i64,
    /// Unix timestamp (seconds)
    pub sunset: i64,
    /// Shift from UTC in seconds
    pub timezone: i64,
}
