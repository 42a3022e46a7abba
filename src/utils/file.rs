//! # Upload Utilities
//!
//! This module provides common utilities for profile image uploads: MIME
//! validation against the image allow-list, unguessable name generation, and
//! file management shared between the upload and clear handlers.

use std::io::ErrorKind;
use std::path::Path;

use rand::RngCore;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, trace, warn};

/// MIME types accepted for profile images, keyed to their storage extension.
pub const ALLOWED_IMAGE_TYPES: [(&str, &str); 4] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Provides image validation utilities for the upload handler.
pub struct ImageUploadValidator;

impl ImageUploadValidator {
    /// Maps a MIME type to its storage extension.
    ///
    /// # Returns
    ///
    /// * `Some(extension)` - MIME type is in the allow-list
    /// * `None` - MIME type is not an accepted image type
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        ALLOWED_IMAGE_TYPES
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, ext)| *ext)
    }
}

/// Provides file system utilities for the image handlers.
pub struct FileManager;

impl FileManager {
    /// Generates an unguessable storage name for an uploaded image.
    ///
    /// The name is 32 random bytes hex-encoded plus the extension, e.g.
    /// `3f…a1.png`. Files live under a public, unauthenticated path, so the
    /// randomness comes from a cryptographically secure generator;
    /// predictable names would allow enumeration of other users' images.
    ///
    /// # Arguments
    ///
    /// * `extension` - The file extension (without dot), from the allow-list
    pub fn generate_image_name(extension: &str) -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);

        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        format!("{hex}.{extension}")
    }

    /// Ensures the specified directory exists, creating it if necessary.
    pub async fn ensure_directory_exists(path: &Path) -> Result<(), std::io::Error> {
        trace!(path = %path.display(), "Ensuring directory exists");
        fs::create_dir_all(path).await
    }

    /// Saves file data to the specified path.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The complete path where the file should be saved
    /// * `data` - The file data to save
    pub async fn save_file(file_path: &Path, data: &[u8]) -> Result<(), std::io::Error> {
        debug!(file_path = %file_path.display(), size = data.len(), "Saving file");

        let mut file = fs::File::create(file_path).await?;
        file.write_all(data).await?;

        debug!(file_path = %file_path.display(), "File saved successfully");
        Ok(())
    }

    /// Removes a superseded image file, tolerating its absence.
    ///
    /// Cleanup must never turn into a user-facing outage: a missing file is
    /// expected and any other I/O failure is logged and swallowed so the
    /// surrounding operation continues.
    pub async fn remove_file_best_effort(file_path: &Path) {
        match fs::remove_file(file_path).await {
            Ok(()) => {
                debug!(file_path = %file_path.display(), "Removed superseded image file");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(file_path = %file_path.display(), "Superseded image file already absent");
            }
            Err(e) => {
                warn!(
                    file_path = %file_path.display(),
                    error = %e,
                    "Failed to remove superseded image file, continuing"
                );
            }
        }
    }
}
