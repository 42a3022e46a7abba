//! # CORS Preflight Handler
//!
//! Answers bare `OPTIONS` requests on the image endpoint with an empty 200.
//! Actual preflight negotiation headers are injected by the CORS layer that
//! wraps the whole router.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// OPTIONS /api/user/{id}/image
///
/// Always returns `200 OK` with an empty body.
#[instrument]
pub async fn image_preflight() -> StatusCode {
    debug!("Preflight request on image endpoint");
    StatusCode::OK
}
