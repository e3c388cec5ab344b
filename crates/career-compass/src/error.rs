use crate::assessment::{AnswerSheetError, NavigationError, ServiceError, ThresholdError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
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
    Server(axum::Error),
    AnswerSheet(AnswerSheetError),
    Assessment(ServiceError),
    Navigation(NavigationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::AnswerSheet(err) => write!(f, "answer sheet error: {}", err),
            AppError::Assessment(err) => write!(f, "assessment error: {}", err),
            AppError::Navigation(err) => write!(f, "navigation error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::AnswerSheet(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::Navigation(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::AnswerSheet(_) | AppError::Assessment(_) | AppError::Navigation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AnswerSheetError> for AppError {
    fn from(value: AnswerSheetError) -> Self {
        Self::AnswerSheet(value)
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        Self::Assessment(value)
    }
}

impl From<NavigationError> for AppError {
    fn from(value: NavigationError) -> Self {
        Self::Navigation(value)
    }
}

impl From<ThresholdError> for AppError {
    fn from(value: ThresholdError) -> Self {
        Self::Config(ConfigError::Recommendation(value))
    }
}
