//! Current weather and forecast handlers

use axum::{Json, extract::State};
use tracing::debug;

use super::{AppState, FirstValueQuery};
use crate::ApiError;
use crate::models::{ForecastReport, LocationQuery, WeatherReport};

/// `GET /api/weather/current?city=&country=&units=`
pub async fn current(
    State(state): State<AppState>,
    FirstValueQuery(query): FirstValueQuery<LocationQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    debug!("Current weather requested for {}", query.provider_location());
    let raw = state.provider.current_weather(&query).await?;
    Ok(Json(WeatherReport::from_openweather(raw, &query.units)))
}

/// `GET /api/weather/forecast?city=&country=&units=`
pub async fn forecast(
    State(state): State<AppState>,
    FirstValueQuery(query): FirstValueQuery<LocationQuery>,
) -> Result<Json<ForecastReport>, ApiError> {
    debug!("Forecast requested for {}", query.provider_location());
    let raw = state.provider.forecast(&query).await?;
    Ok(Json(ForecastReport::from_openweather(raw, query.units)))
}
