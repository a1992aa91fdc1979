use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is recoverable at the session level: a failed transition
/// leaves the session exactly where it was, and the client may correct the
/// input (Validation/Relevance), retry the call (Completion), or re-sync its
/// view of the session (InvalidTransition).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Relevance rejected: {0}")]
    Relevance(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Relevance(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RELEVANCE_REJECTED",
                msg.clone(),
            ),
            AppError::InvalidTransition(msg) => (StatusCode::CONFLICT, "INVALID_TRANSITION", msg.clone()),
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_ERROR",
                    "The question service is unavailable. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
