use crate::catalog::CatalogImportError;
use crate::config::ConfigError;
use crate::recommendation::{ProviderError, RecommendationError};
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogImportError),
    Recommendation(RecommendationError),
    Provider(ProviderError),
    /// Request body that could not be read as a recommendation request.
    InvalidRequest(JsonRejection),
    CatalogUnavailable,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Recommendation(err) => write!(f, "recommendation error: {}", err),
            AppError::Provider(err) => write!(f, "provider error: {}", err),
            AppError::InvalidRequest(err) => write!(f, "invalid request: {}", err.body_text()),
            AppError::CatalogUnavailable => write!(f, "no property data available"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Recommendation(err) => Some(err),
            AppError::Provider(err) => Some(err),
            AppError::InvalidRequest(err) => Some(err),
            AppError::CatalogUnavailable => None,
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Recommendation(RecommendationError::InvalidPreferences(_))
            | AppError::Provider(ProviderError::Rejected(
                RecommendationError::InvalidPreferences(_),
            ))
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Provider(
                ProviderError::Transport(_)
                | ProviderError::Status { .. }
                | ProviderError::Decode(_),
            ) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Catalog(_)
            | AppError::Recommendation(RecommendationError::MalformedRecord(_))
            | AppError::Provider(ProviderError::Rejected(RecommendationError::MalformedRecord(
                _,
            ))) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::Catalog(value)
    }
}

impl From<RecommendationError> for AppError {
    fn from(value: RecommendationError) -> Self {
        Self::Recommendation(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidRequest(value)
    }
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}
