//! Typed errors and HTTP mapping.

use crate::config::ErrorDetail;
use crate::model::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const INVALID_ID: &str = "Invalid coffee ID";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const NOT_FOUND: &str = "Coffee not found";
pub const REDACTED: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("database options: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Map a store failure to a response error, logging full detail and redacting the body unless
    /// `detail` is `Expose`.
    pub fn from_store(err: StoreError, detail: ErrorDetail) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound(NOT_FOUND.into()),
            err => {
                match &err {
                    StoreError::Constraint(_) => tracing::warn!(error = %err, "store rejected coffee"),
                    _ => tracing::error!(error = %err, "store operation failed"),
                }
                match detail {
                    ErrorDetail::Expose => AppError::Internal(err.to_string()),
                    ErrorDetail::Redact => AppError::Internal(REDACTED.into()),
                }
            }
        }
    }
}

/// Single-key error body: `{"error": message}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
