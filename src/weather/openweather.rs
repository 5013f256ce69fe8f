//! `OpenWeatherMap` API response structures
//!
//! Only the fields the gateway maps are declared. Required fields that are
//! absent fail decoding, which is the single place shape errors are raised.

use serde::{Deserialize, Deserializer, de};
use serde_json::Number;

/// `GET /data/2.5/weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    pub coord: Coord,
    pub sys: CurrentSys,
    pub main: CurrentMain,
    #[serde(rename = "weather", deserialize_with = "first_condition")]
    pub condition: ConditionEntry,
    pub wind: Wind,
    pub clouds: Clouds,
    /// Meters; omitted by the provider for some stations
    pub visibility: Option<f64>,
    /// Shift from UTC in seconds
    pub timezone: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentSys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// `humidity` and `pressure` are passed through as the provider sent them
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: Number,
    pub pressure: Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: Option<Number>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    pub all: Number,
}

/// `GET /data/2.5/forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    pub city: ForecastCity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub dt_txt: String,
    pub main: ForecastMain,
    #[serde(rename = "weather", deserialize_with = "first_condition")]
    pub condition: ConditionEntry,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    pub country: String,
}

/// One entry of `GET /geo/1.0/direct` or `GET /geo/1.0/reverse`
///
/// Every field is optional; the gateway fills in blanks instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeocodingEntry {
    pub name: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Keep the first entry of the provider's `weather` array
fn first_condition<'de, D>(deserializer: D) -> Result<ConditionEntry, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<ConditionEntry>::deserialize(deserializer)?;
    entries
        .into_iter()
        .next()
        .ok_or_else(|| de::Error::custom("`weather` list is empty"))
}
