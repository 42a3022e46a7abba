use serde::Serialize;

/// A user record as seen by this service.
///
/// The persistence layer owns the full entity; this core only reads `id` and
/// reads/updates `profile_image` (the public URL of the stored image, or
/// `None` when no image is set).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub profile_image: Option<String>,
}
