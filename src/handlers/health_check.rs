//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Health check endpoint that returns 200 OK.
///
/// Indicates the application is running and able to respond to HTTP
/// requests; performs no store or file system checks.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
