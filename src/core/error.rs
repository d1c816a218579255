use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{MSG_MALFORMED_REQUEST, MSG_METHOD_NOT_ALLOWED, MSG_SEND_FAILED};
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// User-actionable message, returned verbatim
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                MSG_METHOD_NOT_ALLOWED.to_string(),
                None,
            ),
            AppError::MalformedRequest(detail) => {
                tracing::error!("Failed to process form: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_MALFORMED_REQUEST.to_string(),
                    Some(detail),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Transport(detail) => {
                tracing::error!("Failed to send email: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_SEND_FAILED.to_string(),
                    Some(detail),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(message, error));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
