//! Error types for the bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
///
/// The wire contract is stricter than the variant names suggest: a missing
/// path parameter and an unreadable update body both surface as 500s, and
/// not-found is folded into 400 alongside any other store failure.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("unprocessable request body: {0}")]
    UnprocessableBody(String),

    #[error("missing path parameter: {0}")]
    MissingParameter(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("store operation failed: {0}")]
    Store(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::UnprocessableBody(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::MissingParameter(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::InvalidBody(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Store(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { message });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
