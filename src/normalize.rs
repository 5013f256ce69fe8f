//! Conversion from provider payloads to the frontend schema
//!
//! Everything here is pure: no I/O, no failure paths. Shape problems are
//! rejected earlier, when the provider body is decoded.

use crate::models::{
    Condition, Coordinates, FORECAST_ENTRY_LIMIT, ForecastDetails, ForecastEntry,
    ForecastLocation, ForecastReport, LocationMatch, ReportLocation, SystemInfo,
    TemperatureBlock, Units, WeatherDetails, WeatherReport,
};
use crate::weather::openweather::{
    ConditionEntry, CurrentResponse, ForecastItem, ForecastResponse, GeocodingEntry,
};

/// Visibility assumed when the provider omits it, in meters
pub const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;

/// Wind direction assumed when the provider omits it, in degrees
pub const DEFAULT_WIND_DEGREES: i64 = 0;

/// Symbol used for any icon code outside the known vocabulary
pub const DEFAULT_ICON_SYMBOL: &str = "sun";

const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.34;

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Display label for temperatures.
///
/// `standard` (Kelvin) is labelled `°F` as well; clients rely on that label.
#[must_use]
pub fn temperature_unit(units: &Units) -> &'static str {
    if units.is_metric() { "°C" } else { "°F" }
}

/// Provider visibility in meters to kilometers (metric) or miles (otherwise)
#[must_use]
pub fn visibility(meters: Option<f64>, units: &Units) -> f64 {
    let meters = meters.unwrap_or(DEFAULT_VISIBILITY_METERS);
    let divisor = if units.is_metric() {
        METERS_PER_KILOMETER
    } else {
        METERS_PER_MILE
    };
    round1(meters / divisor)
}

/// Upper-case the first character, leave the rest untouched
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Map a provider icon code (`01d`, `10n`, ...) to a frontend symbol
#[must_use]
pub fn icon_symbol(code: &str) -> &'static str {
    match code {
        "01d" => "sun",
        "01n" => "moon",
        "02d" => "cloud-sun",
        "02n" => "cloud-moon",
        "03d" | "03n" | "04d" | "04n" => "cloud",
        "09d" | "09n" | "10d" | "10n" => "cloud-rain",
        "11d" | "11n" => "bolt",
        "13d" | "13n" => "snowflake",
        "50d" | "50n" => "smog",
        _ => DEFAULT_ICON_SYMBOL,
    }
}

impl From<ConditionEntry> for Condition {
    fn from(entry: ConditionEntry) -> Self {
        Self {
            main: entry.main,
            description: capitalize(&entry.description),
            icon_class: icon_symbol(&entry.icon).to_string(),
            icon: entry.icon,
        }
    }
}

impl WeatherReport {
    /// Build the report from a decoded `/data/2.5/weather` body
    #[must_use]
    pub fn from_openweather(raw: CurrentResponse, units: &Units) -> Self {
        Self {
            location: ReportLocation {
                city: raw.name,
                country: raw.sys.country,
                coordinates: Coordinates {
                    lat: raw.coord.lat,
                    lon: raw.coord.lon,
                },
            },
            temperature: TemperatureBlock {
                current: round1(raw.main.temp),
                feels_like: round1(raw.main.feels_like),
                min: round1(raw.main.temp_min),
                max: round1(raw.main.temp_max),
                unit: temperature_unit(units).to_string(),
            },
            weather: raw.condition.into(),
            details: WeatherDetails {
                humidity: raw.main.humidity,
                pressure: raw.main.pressure,
                wind_speed: round1(raw.wind.speed),
                wind_deg: raw.wind.deg.unwrap_or_else(|| DEFAULT_WIND_DEGREES.into()),
                cloudiness: raw.clouds.all,
                visibility: visibility(raw.visibility, units),
            },
            system: SystemInfo {
                sunrise: raw.sys.sunrise,
                sunset: raw.sys.sunset,
                timezone: raw.timezone,
            },
        }
    }
}

impl From<ForecastItem> for ForecastEntry {
    fn from(item: ForecastItem) -> Self {
        Self {
            datetime: item.dt_txt,
            temperature: round1(item.main.temp),
            feels_like: round1(item.main.feels_like),
            weather: item.condition.into(),
            details: ForecastDetails {
                humidity: item.main.humidity,
                wind_speed: round1(item.wind.speed),
            },
        }
    }
}

impl ForecastReport {
    /// Build the report from a decoded `/data/2.5/forecast` body.
    ///
    /// Keeps at most [`FORECAST_ENTRY_LIMIT`] entries even if the provider
    /// ignored the requested count.
    #[must_use]
    pub fn from_openweather(raw: ForecastResponse, units: Units) -> Self {
        Self {
            location: ForecastLocation {
                city: raw.city.name,
                country: raw.city.country,
            },
            forecast: raw
                .list
                .into_iter()
                .take(FORECAST_ENTRY_LIMIT)
                .map(ForecastEntry::from)
                .collect(),
            units,
        }
    }
}

impl From<GeocodingEntry> for LocationMatch {
    fn from(entry: GeocodingEntry) -> Self {
        Self {
            name: entry.name.unwrap_or_default(),
            state: entry.state.unwrap_or_default(),
            country: entry.country.unwrap_or_default(),
            lat: entry.lat,
            lon: entry.lon,
        }
    }
}
