//! Weather lookup errors.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::constants::{FETCH_ERROR_MESSAGE, JSON_CONTENT_TYPE};

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Forecast provider returned status {0}")]
    ProviderError(reqwest::StatusCode),

    #[error("Forecast provider unreachable: {0}")]
    ProviderUnreachable(#[source] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl WeatherError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LocationNotFound(_) => "location_not_found",
            Self::ProviderError(_) => "provider_error",
            Self::ProviderUnreachable(_) => "provider_unreachable",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Every failure collapses into the same 500 body; the cause is only logged.
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), error = %self, "Weather request failed");
        error_response()
    }
}

pub(crate) fn error_response() -> Response {
    let body = serde_json::json!({ "error": FETCH_ERROR_MESSAGE }).to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response()
}
