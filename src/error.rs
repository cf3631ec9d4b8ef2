//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Unknown item ids: {0:?}")]
    UnknownItems(Vec<i64>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    /// Default not-found error for an entity looked up by id.
    pub fn not_found() -> Self {
        AppError::NotFound("Not found".into())
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Migrate(_) => (StatusCode::INTERNAL_SERVER_ERROR, "migration_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, "conflict"),
            AppError::UnknownItems(_) => (StatusCode::BAD_REQUEST, "unknown_items"),
            AppError::Db(sqlx::Error::RowNotFound) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let (message, details) = match &self {
            AppError::Db(sqlx::Error::RowNotFound) => ("Not found".to_string(), None),
            // Storage errors are logged, the caller only sees a generic message.
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                ("internal database error".to_string(), None)
            }
            AppError::Config(_) => {
                tracing::error!(error = %self, "server misconfigured");
                ("internal server error".to_string(), None)
            }
            AppError::Migrate(e) => {
                tracing::error!(error = %e, "schema migration failed");
                ("internal server error".to_string(), None)
            }
            AppError::UnknownItems(ids) => (
                self.to_string(),
                Some(serde_json::json!({ "missing_item_ids": ids })),
            ),
            _ => (self.to_string(), None),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
