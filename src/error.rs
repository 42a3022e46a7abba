//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! It centralizes error logging and HTTP response generation, eliminating
//! repetitive error handling patterns throughout the codebase.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Central application error type that encompasses all possible error conditions.
///
/// Validation errors (4xx) are detected before any side effect occurs; store
/// and I/O errors surface as 500 with the underlying error's text. _Store and
/// I/O errors are logged automatically, while validation errors should be
/// logged at the point of creation if needed._
#[derive(Error, Debug)]
pub enum AppError {
    /// The caller-supplied identifier was empty or absent after trimming.
    #[error("invalid user id")]
    InvalidIdentifier,

    /// The request body was not valid multipart/form-data.
    #[error("invalid form data")]
    InvalidRequestBody,

    /// The multipart body carried no `file` field, or the field was not a file.
    #[error("no file uploaded")]
    NoFileUploaded,

    /// The uploaded file's MIME type is not in the image allow-list.
    #[error("unsupported media type")]
    UnsupportedMediaType,

    /// A freshly generated image URL failed to resolve under the public
    /// subtree. The prefix is fixed by the generator itself, so this branch
    /// is an invariant check rather than an expected failure.
    #[error("failed to build image path")]
    PathResolution,

    /// No user record matched the normalized identifier.
    #[error("user not found")]
    UserNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidIdentifier => (StatusCode::BAD_REQUEST, "Invalid user id".to_string()),
            AppError::InvalidRequestBody => {
                (StatusCode::BAD_REQUEST, "Invalid form data".to_string())
            }
            AppError::NoFileUploaded => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
            AppError::UnsupportedMediaType => {
                (StatusCode::BAD_REQUEST, "Only image files allowed".to_string())
            }
            AppError::PathResolution => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to build image path".to_string(),
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            AppError::Store(e) => {
                error!(error = %e, "Store error while handling image request");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Io(e) => {
                error!(error = %e, "I/O error while handling image request");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
