//! Response envelope and HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jsonsage_core::SageError;
use serde::Serialize;

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// `{status, message, result?}` wrapper used by the analyzer endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, result: T) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            result: Some(result),
        }
    }
}

impl Envelope<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            result: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input (400)
    BadRequest(String),
    /// Anything else (500)
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!(%msg, "Request failed");
                msg
            }
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}

impl From<SageError> for AppError {
    fn from(err: SageError) -> Self {
        AppError::Internal(err.to_string())
    }
}
