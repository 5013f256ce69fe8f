//! Forecast report returned by `/api/weather/forecast`

use super::{Condition, Units};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Maximum number of entries in a forecast report.
///
/// The provider steps in 3-hour intervals, so this covers roughly the next
/// 15 hours rather than five days.
pub const FORECAST_ENTRY_LIMIT: usize = 5;

/// Short-range forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub location: ForecastLocation,
    /// Ordered by time, at most [`FORECAST_ENTRY_LIMIT`] entries
    pub forecast: Vec<ForecastEntry>,
    /// Units the client asked for, echoed verbatim
    pub units: Units,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Provider timestamp text, `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub weather: Condition,
    pub details: ForecastDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDetails {
    pub humidity: Number,
    pub wind_speed: f64,
}
