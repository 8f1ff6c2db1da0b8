//! Typed errors and HTTP mapping.

use crate::response::{error_body, validation_errors_body};
use crate::service::validation::ValidationError;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    MalformedBody(String),
    #[error("{0}")]
    InvalidField(String),
    #[error("{0}")]
    ForeignKey(String),
    #[error("{0}")]
    Check(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ForeignKey(msg) => AppError::ForeignKey(msg),
            StoreError::Check(msg) => AppError::Check(msg),
            StoreError::Db(e) => AppError::Db(e),
        }
    }
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::MalformedBody(_) => "malformed_body",
            AppError::InvalidField(_) => "invalid_field",
            AppError::ForeignKey(_) => "foreign_key_violation",
            AppError::Check(_) => "check_violation",
            AppError::Db(_) => "database_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        match &self {
            AppError::Validation(_) | AppError::Check(_) => {
                tracing::warn!(code, reason = %self, "rejected by price rule");
                (StatusCode::BAD_REQUEST, Json(validation_errors_body())).into_response()
            }
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(error_body(self.to_string()))).into_response()
            }
            AppError::MalformedBody(_) | AppError::InvalidField(_) | AppError::ForeignKey(_) => {
                tracing::warn!(code, reason = %self, "bad request");
                (StatusCode::BAD_REQUEST, Json(error_body(self.to_string()))).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(code, error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("database error".to_string())),
                )
                    .into_response()
            }
        }
    }
}
