use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reelrank_core::ReelError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Server-specific error types.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Core recommendation error: {0}")]
    CoreError(#[from] ReelError), // Automatically convert from ReelError

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Implement IntoResponse for ServerError to automatically convert errors into HTTP responses.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ServerError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, format!("Bad request: {}", reason))
            }
            ServerError::CoreError(core_err) => match core_err {
                ReelError::NotFound(id) => (
                    StatusCode::NOT_FOUND,
                    format!("Movie ID '{}' not found", id),
                ),
                ReelError::InsufficientData => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "No rating cleared the good threshold, cannot build a taste vector"
                        .to_string(),
                ),
                ReelError::InvalidParameter(msg) => {
                    (StatusCode::BAD_REQUEST, format!("Invalid parameter: {}", msg))
                }
                ReelError::DimensionMismatch { expected, actual } => {
                    error!(expected, actual, "Core dimension mismatch");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error (vector dimensions)".to_string(),
                    )
                }
                ReelError::IoError { path, source } => {
                    error!(path = ?path, error = %source, "Core I/O error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error (I/O)".to_string(),
                    )
                }
                ReelError::Deserialization(msg) => {
                    error!(error = %msg, "Core deserialization error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error (deserialization)".to_string(),
                    )
                }
            },
            ServerError::Internal(msg) => {
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        // Log the error before returning response
        error!("Responding with status {}: {}", status, error_message);

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

// Define a Result type alias for handler functions
pub type ServerResult<T> = Result<T, ServerError>;
