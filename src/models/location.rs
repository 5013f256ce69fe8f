//! Location inputs and geocoding matches

use crate::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement system requested by the client
///
/// Values other than the three known ones are kept verbatim and forwarded to
/// the provider, which falls back to its absolute (Kelvin) scale for them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
    Other(String),
}

impl Units {
    /// Parse a raw `units` query value
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "metric" => Self::Metric,
            "imperial" => Self::Imperial,
            "standard" => Self::Standard,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_metric(&self) -> bool {
        matches!(self, Self::Metric)
    }

    /// Value of the provider's `units` parameter, `None` when it must be omitted
    #[must_use]
    pub fn provider_param(&self) -> Option<&str> {
        match self {
            Self::Standard => None,
            other => Some(other.as_str()),
        }
    }
}

impl From<String> for Units {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Units> for String {
    fn from(units: Units) -> Self {
        units.as_str().to_string()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name-based lookup for current weather and forecast
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationQuery {
    pub city: String,
    /// Country code (ISO 3166-1 alpha-2 or similar)
    pub country: String,
    pub units: Units,
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self {
            city: "London".to_string(),
            country: "UK".to_string(),
            units: Units::Metric,
        }
    }
}

impl LocationQuery {
    /// Provider `q` value, `"{city},{country}"`
    #[must_use]
    pub fn provider_location(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

/// Coordinates for a reverse lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateQuery {
    pub lat: f64,
    pub lon: f64,
}

impl CoordinateQuery {
    /// Validate raw `lat`/`lon` query values.
    ///
    /// Both are required; blank values count as missing.
    pub fn from_params(lat: Option<&str>, lon: Option<&str>) -> crate::Result<Self> {
        let (Some(lat), Some(lon)) = (
            lat.map(str::trim).filter(|s| !s.is_empty()),
            lon.map(str::trim).filter(|s| !s.is_empty()),
        ) else {
            return Err(ApiError::validation("Latitude and longitude are required"));
        };

        let lat = lat
            .parse::<f64>()
            .map_err(|_| ApiError::validation(format!("Invalid latitude: {lat}")))?;
        let lon = lon
            .parse::<f64>()
            .map_err(|_| ApiError::validation(format!("Invalid longitude: {lon}")))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(ApiError::validation(format!(
                "Latitude must be between -90 and 90, got: {lat}"
            )));
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(ApiError::validation(format!(
                "Longitude must be between -180 and 180, got: {lon}"
            )));
        }

        Ok(Self { lat, lon })
    }
}

/// One geocoding result as returned to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMatch {
    pub name: String,
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
