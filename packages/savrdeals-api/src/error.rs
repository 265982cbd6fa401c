//! Error types for the API service.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use savrdeals_types::CatalogError;
use std::fmt;
use std::sync::atomic::Ordering;

use crate::metrics::METRICS;

#[derive(Debug)]
pub enum Error {
    /// Startup configuration or catalog problem.
    Config(String),
    /// Request body could not be read as JSON of the expected shape.
    BadRequest(String),
    NotFound(String),
    /// Badge exists but the balance has not unlocked it.
    Forbidden(String),
    PayloadTooLarge(String),
    /// Body sent without a JSON content type.
    UnsupportedMediaType(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::BadRequest(msg) => write!(f, "bad request: {msg}"),
            Error::NotFound(msg) => write!(f, "not found: {msg}"),
            Error::Forbidden(msg) => write!(f, "forbidden: {msg}"),
            Error::PayloadTooLarge(msg) => write!(f, "payload too large: {msg}"),
            Error::UnsupportedMediaType(msg) => write!(f, "unsupported media type: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(e: CatalogError) -> Self {
        Error::Config(e.to_string())
    }
}

/// Keeps the rejection's own status: body-limit overflows stay 413, a
/// missing `content-type` stays 415, everything else is a 400.
impl From<JsonRejection> for Error {
    fn from(e: JsonRejection) -> Self {
        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge(e.body_text()),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Error::UnsupportedMediaType(e.body_text()),
            _ => Error::BadRequest(e.body_text()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        };
        METRICS.request_errors.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string()
        });
        (status, Json(body)).into_response()
    }
}
