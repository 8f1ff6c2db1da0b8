//! Response bodies shared by handlers and error mapping.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{"error": "<message>"}`
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"errors": [...]}`; the messages are fixed, details stay in the logs.
#[derive(Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

pub const VALIDATION_ERRORS: &str = "validation errors";

pub fn error_body(message: String) -> ErrorBody {
    ErrorBody { error: message }
}

pub fn validation_errors_body() -> ErrorsBody {
    ErrorsBody {
        errors: vec![VALIDATION_ERRORS.to_string()],
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
