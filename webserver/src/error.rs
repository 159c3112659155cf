//! WebServer-specific error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shared::ValidationError;
use thiserror::Error;

/// Reasons a headline template set is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template set is empty")]
    Empty,

    #[error("Template {index} is missing the {placeholder} placeholder")]
    MissingPlaceholder { index: usize, placeholder: &'static str },

    #[error("Template {index} has overlapping NAME and LOCATION placeholders")]
    OverlappingPlaceholders { index: usize },
}

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Invalid headline templates: {0}")]
    Template(#[from] TemplateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest { details: details.into() }
    }

    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Validation(_) | WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Client errors carry their cause; server errors stay opaque
        let message = if status.is_client_error() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
