//! # Profile Image Upload Handler
//!
//! This module implements the HTTP handler that uploads (and replaces) a
//! user's profile image. The uploaded file is stored under the public image
//! subtree with an unguessable name, the old file is removed best-effort,
//! and the user record's public URL is updated last so the record never
//! points at a file that was not written.
//!
//! # File Storage
//!
//! Files are stored in `{public root}/profile-images/{64-hex}.{ext}` and the
//! resulting `/profile-images/{64-hex}.{ext}` URL is recorded on the user.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    models::{AppState, Identifier},
    utils::{
        constant::PUBLIC_IMAGE_PREFIX,
        file::{FileManager, ImageUploadValidator},
        public_path::resolve_public_image_path,
    },
};

/// Response structure for successful profile image upload.
#[derive(Serialize)]
struct UploadImageResponse {
    #[serde(rename = "imageUrl")]
    image_url: String,
}

/// Uploads a profile image for the addressed user.
///
/// POST /api/user/{id}/image MultipartForm
///
/// This endpoint accepts multipart/form-data with a `file` field, stores the
/// image under the public subtree, deletes the previously stored image (if
/// any) and records the new public URL on the user.
///
/// # Security & Validation
///
/// - Identifier is normalized before anything else; empty means 400
/// - MIME type must be in the image allow-list (JPEG, PNG, GIF, WEBP)
/// - Storage names are 32 random bytes hex-encoded, from a CSPRNG
/// - Old-file cleanup goes through the public path resolver, so a corrupted
///   stored URL can never delete files outside the public subtree
///
/// # Ordering
///
/// The file is written before the user record is updated: a store failure
/// leaves an orphaned file (harmless, reclaimed by a future overwrite) but
/// never a recorded URL without a file behind it. Two concurrent uploads for
/// the same user are not mutually excluded; the last record update wins and
/// the loser's file becomes such an orphan.
///
/// # Returns
///
/// - `200 OK` with `{"imageUrl": …}` - Image stored and recorded
/// - `400 Bad Request` - Invalid id, bad body, missing file, or bad MIME type
/// - `404 Not Found` - No user matches the identifier
/// - `500 Internal Server Error` - File system or store error
#[instrument(
    skip_all,
    fields(
        user = %raw_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing profile image upload request");

    let id = Identifier::parse(&raw_id).ok_or_else(|| {
        warn!("Empty user identifier");
        AppError::InvalidIdentifier
    })?;

    let mut multipart = multipart.map_err(|e| {
        warn!(error = %e, "Request body is not multipart/form-data");
        AppError::InvalidRequestBody
    })?;

    // Extract the `file` field from the multipart form
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Error reading multipart form");
        AppError::InvalidRequestBody
    })? {
        let field_name = field.name().unwrap_or("");

        if field_name == "file" {
            // A `file` field without a filename is a plain text value
            if field.file_name().is_none() {
                warn!("`file` field is not a file");
                return Err(AppError::NoFileUploaded);
            }

            let content_type = field.content_type().unwrap_or("").to_string();
            let data = field.bytes().await.map_err(|e| {
                warn!(error = %e, "Error reading file data");
                AppError::InvalidRequestBody
            })?;

            upload = Some((content_type, data));
            break;
        }

        warn!(field_name = %field_name, "Unknown field in multipart form");
    }

    let (content_type, file_data) = upload.ok_or_else(|| {
        warn!("No file provided in multipart form");
        AppError::NoFileUploaded
    })?;

    // Validate MIME type against the allow-list
    let extension = ImageUploadValidator::extension_for(&content_type).ok_or_else(|| {
        warn!(content_type = %content_type, "Unsupported media type");
        AppError::UnsupportedMediaType
    })?;

    let filename = FileManager::generate_image_name(extension);
    let image_url = format!("{PUBLIC_IMAGE_PREFIX}{filename}");
    let save_path =
        resolve_public_image_path(&state.public_root, &image_url).ok_or_else(|| {
            // Unreachable in practice: the generator fixed the prefix itself
            error!(image_url = %image_url, "Generated image URL failed path resolution");
            AppError::PathResolution
        })?;

    let user = state.store.find_user(&id).await?.ok_or_else(|| {
        warn!(key = %id.key(), "User not found");
        AppError::UserNotFound
    })?;

    // Best-effort removal of the superseded image; never aborts the upload
    if let Some(old_url) = &user.profile_image {
        match resolve_public_image_path(&state.public_root, old_url) {
            Some(old_path) => FileManager::remove_file_best_effort(&old_path).await,
            None => {
                warn!(old_url = %old_url, "Stored image URL outside public subtree, skipping removal")
            }
        }
    }

    if let Some(parent) = save_path.parent() {
        FileManager::ensure_directory_exists(parent).await?;
    }
    FileManager::save_file(&save_path, &file_data).await?;

    // Durable commit point: from here the record points at the new file
    state
        .store
        .set_profile_image(&user.id, Some(&image_url))
        .await?;

    info!(
        file_size = file_data.len(),
        image_url = %image_url,
        "Profile image uploaded successfully"
    );

    Ok((StatusCode::OK, Json(UploadImageResponse { image_url })))
}
