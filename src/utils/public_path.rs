//! # Public Path Resolution
//!
//! Maps stored public image URLs back to on-disk paths. This is a security
//! boundary: stored URLs come back out of the database and are fed to file
//! deletion, so anything not rooted at the public image subtree is rejected
//! outright rather than sanitized.

use std::path::{Component, Path, PathBuf};

use crate::utils::constant::PUBLIC_IMAGE_PREFIX;

/// Returns the on-disk directory holding public images under `public_root`.
pub fn public_image_dir(public_root: &Path) -> PathBuf {
    public_root.join(PUBLIC_IMAGE_PREFIX.trim_matches('/'))
}

/// Resolves a stored public image URL to its on-disk path.
///
/// # Returns
///
/// * `Some(path)` - URL starts with [`PUBLIC_IMAGE_PREFIX`] and the remainder
///   is a plain file name (no `..`, no absolute or prefix components)
/// * `None` - URL is empty, unprefixed, or would escape the subtree
pub fn resolve_public_image_path(public_root: &Path, image_url: &str) -> Option<PathBuf> {
    let relative = image_url.strip_prefix(PUBLIC_IMAGE_PREFIX)?;
    if relative.is_empty() {
        return None;
    }

    // Reject rather than sanitize: any non-plain component means the stored
    // URL is corrupted or hostile.
    let candidate = Path::new(relative);
    if candidate
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    Some(public_image_dir(public_root).join(relative))
}
