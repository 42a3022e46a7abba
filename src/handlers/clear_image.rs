//! # Profile Image Clear Handler
//!
//! This module implements the HTTP handler that clears a user's stored
//! profile image: the underlying file is removed best-effort and the
//! recorded public URL is set back to null.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    models::{AppState, Identifier},
    utils::{file::FileManager, public_path::resolve_public_image_path},
};

/// Response structure for a successful clear.
#[derive(Serialize)]
struct ClearImageResponse {
    message: &'static str,
}

/// Clears the addressed user's profile image.
///
/// DELETE /api/user/{id}/image
///
/// Removes the stored image file if one exists (its absence is not an
/// error), then nulls the user's recorded URL. The record update is the
/// must-succeed step; file cleanup never blocks it.
///
/// # Returns
///
/// - `200 OK` with `{"message": "OK"}` - Image cleared
/// - `400 Bad Request` - Empty identifier
/// - `404 Not Found` - No user matches the identifier
/// - `500 Internal Server Error` - Store error
#[instrument(
    skip_all,
    fields(
        user = %raw_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn clear_image(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing profile image clear request");

    let id = Identifier::parse(&raw_id).ok_or_else(|| {
        warn!("Empty user identifier");
        AppError::InvalidIdentifier
    })?;

    let user = state.store.find_user(&id).await?.ok_or_else(|| {
        warn!(key = %id.key(), "User not found");
        AppError::UserNotFound
    })?;

    if let Some(old_url) = &user.profile_image {
        match resolve_public_image_path(&state.public_root, old_url) {
            Some(old_path) => FileManager::remove_file_best_effort(&old_path).await,
            None => {
                warn!(old_url = %old_url, "Stored image URL outside public subtree, skipping removal")
            }
        }
    }

    state.store.set_profile_image(&user.id, None).await?;

    info!("Profile image cleared successfully");

    Ok((StatusCode::OK, Json(ClearImageResponse { message: "OK" })))
}
