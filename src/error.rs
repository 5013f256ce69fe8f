//! Error types and HTTP error classification for the weather gateway

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Main error type for the weather gateway
///
/// Every variant renders as a `{"error": "<message>"}` body. The message is the
/// `Display` output, so the prefixes below are part of the HTTP contract.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client supplied missing or malformed parameters
    #[error("{message}")]
    InputValidation { message: String },

    /// Valid request, but the provider had no matching data
    #[error("{message}")]
    NotFound { message: String },

    /// Network failure, timeout or non-2xx status talking to the provider
    #[error("Weather API request failed: {message}")]
    UpstreamTransport { message: String },

    /// Provider answered, but the body lacks the expected structure
    #[error("Invalid response format from weather API: {message}")]
    UpstreamShape { message: String },

    /// Anything not covered above
    #[error("Unexpected error: {message}")]
    Unexpected { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ApiError {
    /// Create a new input validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::InputValidation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::UpstreamTransport {
            message: message.into(),
        }
    }

    /// Create a new upstream shape error
    pub fn shape<S: Into<String>>(message: S) -> Self {
        Self::UpstreamShape {
            message: message.into(),
        }
    }

    /// Create a new catch-all error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InputValidation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamTransport { .. }
            | Self::UpstreamShape { .. }
            | Self::Unexpected { .. }
            | Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures raised by the provider client before any mapping happens
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Connection error, timeout or non-2xx status
    #[error("{0}")]
    Transport(String),

    /// Body could not be decoded into the expected structure
    #[error("{0}")]
    Shape(String),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Transport(message) => Self::transport(message),
            ProviderError::Shape(message) => Self::shape(message),
        }
    }
}

/// JSON body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_client_error() {
            warn!(status = status.as_u16(), "Rejecting request: {}", message);
        } else {
            error!(status = status.as_u16(), "Request failed: {}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
