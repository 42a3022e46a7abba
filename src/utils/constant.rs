//! # Application Constants
//!
//! This module defines configuration constants and environment-backed
//! statics used throughout the Portrait application.

use std::env;
use std::sync::LazyLock;

use tracing::error;

/// URL prefix under which stored profile images are publicly reachable.
///
/// Stored image URLs are always of the form `/profile-images/{filename}`;
/// the path resolver refuses anything not rooted here.
pub const PUBLIC_IMAGE_PREFIX: &str = "/profile-images/";

/// Root of the public directory on disk.
///
/// Image files are written under `{PUBLIC_DIR}/profile-images/` and served
/// from there.
pub static PUBLIC_DIR: LazyLock<String> = LazyLock::new(|| {
    env::var("PUBLIC_DIR").unwrap_or_else(|_| {
        error!("Missing PUBLIC_DIR env var, using fallback './public'");
        "./public".to_string()
    })
});

/// Origin allowed by the CORS layer.
///
/// `"*"` allows any origin; anything else must parse as a header value.
pub static ALLOWED_ORIGIN: LazyLock<String> = LazyLock::new(|| {
    env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| {
        error!("Missing ALLOWED_ORIGIN env var, using fallback '*'");
        "*".to_string()
    })
});
