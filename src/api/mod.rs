//! HTTP routes under `/api` plus the static help page

use std::sync::Arc;

use axum::{Json, Router, extract::State, response::Html, routing::get};
use serde::{Deserialize, Serialize};

use crate::weather::WeatherProvider;

pub mod location;
mod query;
pub mod weather;

pub use query::FirstValueQuery;

const SERVICE_NAME: &str = "Weather API";

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    /// Base URL used for the example links of `/api/test`
    pub public_url: Arc<str>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>, public_url: &str) -> Self {
        Self {
            provider,
            public_url: Arc::from(public_url.trim_end_matches('/')),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointDirectory {
    pub message: String,
    pub endpoints: EndpointPaths,
    pub example_queries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointPaths {
    pub health: String,
    pub current_weather: String,
    pub forecast: String,
    pub location_search: String,
    pub location_reverse: String,
    pub test: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/test", get(endpoints))
        .route("/weather/current", get(weather::current))
        .route("/weather/forecast", get(weather::forecast))
        .route("/location/search", get(location::search))
        .route("/location/reverse", get(location::reverse))
}

/// Liveness check; never contacts the provider
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Static listing of the routes with ready-to-click examples
pub async fn endpoints(State(state): State<AppState>) -> Json<EndpointDirectory> {
    let base = &state.public_url;
    Json(EndpointDirectory {
        message: format!("{SERVICE_NAME} is working correctly!"),
        endpoints: EndpointPaths {
            health: "/api/health".to_string(),
            current_weather: "/api/weather/current?city=London&country=UK".to_string(),
            forecast: "/api/weather/forecast?city=London".to_string(),
            location_search: "/api/location/search?q=London".to_string(),
            location_reverse: "/api/location/reverse?lat=51.5074&lon=-0.1278".to_string(),
            test: "/api/test".to_string(),
        },
        example_queries: vec![
            format!("{base}/api/weather/current?city=London"),
            format!("{base}/api/weather/current?city=Delhi&country=IN"),
            format!("{base}/api/weather/current?city=New%20York&country=US&units=imperial"),
        ],
    })
}

/// Human-readable landing page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
