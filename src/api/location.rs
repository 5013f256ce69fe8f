//! Location search and reverse geocoding handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::debug;

use super::{AppState, FirstValueQuery};
use crate::ApiError;
use crate::models::{CoordinateQuery, LocationMatch};

/// Shorter queries are answered locally with an empty list
pub const MIN_SEARCH_CHARS: usize = 2;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReverseParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// `GET /api/location/search?q=`
pub async fn search(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<SearchParams>,
) -> Result<Json<Vec<LocationMatch>>, ApiError> {
    let Some(query) = params
        .q
        .filter(|q| q.chars().count() >= MIN_SEARCH_CHARS)
    else {
        debug!("Search query too short, skipping provider call");
        return Ok(Json(Vec::new()));
    };

    let entries = state.provider.search_locations(&query).await?;
    Ok(Json(entries.into_iter().map(LocationMatch::from).collect()))
}

/// `GET /api/location/reverse?lat=&lon=`
pub async fn reverse(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<ReverseParams>,
) -> Result<Json<LocationMatch>, ApiError> {
    let coords = CoordinateQuery::from_params(params.lat.as_deref(), params.lon.as_deref())?;

    let entries = state.provider.reverse_geocode(&coords).await?;
    entries
        .into_iter()
        .next()
        .map(|entry| Json(LocationMatch::from(entry)))
        .ok_or_else(|| ApiError::not_found("No location found for these coordinates"))
}
