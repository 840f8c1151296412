//! Error type returned by every handler.
//!
//! Validation and not-found errors carry a descriptive message back to the
//! client. Storage failures are logged and answered with a generic body so
//! that no internal detail leaks.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use todo_core::storage::{repository_error_to_status_code, RepositoryError};
use todo_core::todo::TodoError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was well-formed but failed validation.
    #[error(transparent)]
    Validation(#[from] TodoError),

    /// The request body or path could not be extracted.
    #[error("{message}")]
    InvalidInput {
        status: StatusCode,
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One entry of a field-level error report.
#[derive(Debug, Serialize)]
struct FieldError<'a> {
    field: &'a str,
    message: String,
}

#[derive(Debug, Serialize)]
struct FieldErrorBody<'a> {
    detail: Vec<FieldError<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    detail: String,
}

fn field_error(status: StatusCode, field: &str, message: String) -> Response {
    tracing::warn!(status = %status, field, message = %message, "Rejected request");
    let body = FieldErrorBody {
        detail: vec![FieldError { field, message }],
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                field_error(StatusCode::UNPROCESSABLE_ENTITY, err.field(), err.to_string())
            }
            ApiError::InvalidInput {
                status,
                field,
                message,
            } => field_error(status, field, message),
            ApiError::Repository(err @ RepositoryError::NotFound { .. }) => {
                tracing::warn!(error = %err, "Resource not found");
                let body = MessageBody {
                    detail: err.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "Storage error");
                let status = StatusCode::from_u16(repository_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let detail = if status == StatusCode::SERVICE_UNAVAILABLE {
                    "Service unavailable"
                } else {
                    "Internal server error"
                };
                let body = MessageBody {
                    detail: detail.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Unparseable and mistyped bodies are both validation failures;
        // keep axum's status for everything else (e.g. 415 without a JSON content type).
        let status = match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => rejection.status(),
        };
        ApiError::InvalidInput {
            status,
            field: "body",
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            field: "id",
            message: rejection.body_text(),
        }
    }
}
