//! Provider client for the `OpenWeatherMap` weather and geocoding APIs
//!
//! Each public operation issues exactly one GET request. There is no retry
//! and no caching; a failure is returned to the caller as-is.

use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::ProviderError;
use crate::config::ProviderConfig;
use crate::models::{CoordinateQuery, LocationQuery};

pub mod openweather;

pub use openweather::{CurrentResponse, ForecastResponse, GeocodingEntry};

const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const DIRECT_GEOCODING_PATH: &str = "/geo/1.0/direct";
const REVERSE_GEOCODING_PATH: &str = "/geo/1.0/reverse";

/// Provider-side `cnt` for forecasts (five 3-hour steps)
const FORECAST_COUNT: &str = "5";
const SEARCH_LIMIT: &str = "5";
const REVERSE_LIMIT: &str = "1";

const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Outbound operations the HTTP handlers depend on
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a named location
    async fn current_weather(&self, query: &LocationQuery)
    -> Result<CurrentResponse, ProviderError>;

    /// Short-range forecast for a named location
    async fn forecast(&self, query: &LocationQuery) -> Result<ForecastResponse, ProviderError>;

    /// Free-text location search
    async fn search_locations(&self, query: &str) -> Result<Vec<GeocodingEntry>, ProviderError>;

    /// Names for a coordinate pair
    async fn reverse_geocode(
        &self,
        coords: &CoordinateQuery,
    ) -> Result<Vec<GeocodingEntry>, ProviderError>;
}

/// HTTP client for `OpenWeatherMap`
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenWeatherClient {
    /// Create a new client; the timeout applies to every request
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("weather-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Issue one GET and decode the body into `T`.
    ///
    /// `params` must not contain the credential; it is appended here so that
    /// it never reaches the span fields or error messages.
    #[instrument(skip(self, params))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        debug!("Calling provider with params {:?}", params);
        let start_time = Instant::now();

        let response = self
            .client
            .get(self.endpoint(path))
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider responded with HTTP {}", status);
            return Err(status_error(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        let elapsed = start_time.elapsed();
        info!(
            "Provider answered in {:.3}s ({} bytes)",
            elapsed.as_secs_f64(),
            body.len()
        );
        if elapsed > SLOW_RESPONSE {
            warn!("Slow provider response: {:.3}s", elapsed.as_secs_f64());
        }

        serde_json::from_slice(&body).map_err(|e| ProviderError::Shape(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Transport(format!(
                "request timed out after {}s",
                self.config.timeout_seconds
            ))
        } else {
            // the URL carries the credential
            ProviderError::Transport(err.without_url().to_string())
        }
    }
}

fn status_error(status: StatusCode) -> ProviderError {
    ProviderError::Transport(format!("provider responded with {status}"))
}

/// Query parameters for a name-based lookup, `units` omitted for `standard`
fn location_params(query: &LocationQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", query.provider_location())];
    if let Some(units) = query.units.provider_param() {
        params.push(("units", units.to_string()));
    }
    params
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentResponse, ProviderError> {
        info!("Fetching current weather");
        self.fetch(CURRENT_PATH, &location_params(query)).await
    }

    #[instrument(skip(self))]
    async fn forecast(&self, query: &LocationQuery) -> Result<ForecastResponse, ProviderError> {
        info!("Fetching forecast");
        let mut params = location_params(query);
        params.push(("cnt", FORECAST_COUNT.to_string()));
        self.fetch(FORECAST_PATH, &params).await
    }

    #[instrument(skip(self))]
    async fn search_locations(&self, query: &str) -> Result<Vec<GeocodingEntry>, ProviderError> {
        info!("Searching locations");
        let params = [("q", query.to_string()), ("limit", SEARCH_LIMIT.to_string())];
        let results: Vec<GeocodingEntry> = self.fetch(DIRECT_GEOCODING_PATH, &params).await?;
        if results.is_empty() {
            warn!("No results found for location '{}'", query);
        }
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        coords: &CoordinateQuery,
    ) -> Result<Vec<GeocodingEntry>, ProviderError> {
        info!("Reverse geocoding coordinates");
        let params = [
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("limit", REVERSE_LIMIT.to_string()),
        ];
        self.fetch(REVERSE_GEOCODING_PATH, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Units;

    fn client_with_base(base_url: &str) -> OpenWeatherClient {
        OpenWeatherClient::new(ProviderConfig {
            base_url: base_url.to_string(),
            ..ProviderConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = client_with_base("https://api.openweathermap.org/");
        assert_eq!(
            client.endpoint(CURRENT_PATH),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[test]
    fn test_location_params_metric() {
        let params = location_params(&LocationQuery::default());
        assert_eq!(
            params,
            vec![("q", "London,UK".to_string()), ("units", "metric".to_string())]
        );
    }

    #[test]
    fn test_location_params_standard_omits_units() {
        let query = LocationQuery {
            city: "Delhi".to_string(),
            country: "IN".to_string(),
            units: Units::Standard,
        };
        let params = location_params(&query);
        assert_eq!(params, vec![("q", "Delhi,IN".to_string())]);
    }

    #[test]
    fn test_location_params_forwards_unknown_units() {
        let query = LocationQuery {
            units: Units::parse("kelvin"),
            ..LocationQuery::default()
        };
        let params = location_params(&query);
        assert!(params.contains(&("units", "kelvin".to_string())));
    }

    #[test]
    fn test_status_error_message() {
        let err = status_error(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "provider responded with 404 Not Found");
    }
}
