//! Query-string extractor shared by the handlers

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ApiError;

/// Like [`Query`], but a repeated key keeps its first value and rejections
/// are reported as [`ApiError`] so they carry the regular `{error}` body.
#[derive(Debug, Clone, Default)]
pub struct FirstValueQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        serde_json::from_value(first_values(pairs))
            .map(FirstValueQuery)
            .map_err(|e| ApiError::validation(format!("Invalid query parameters: {e}")))
    }
}

fn first_values(pairs: Vec<(String, String)>) -> Value {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }
    Value::Object(fields)
}
