use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::{Identifier, UserRecord};
use crate::store::{StoreError, UserStore};

/// In-memory user store keyed by user id.
///
/// Backs local development when no database is configured, and the
/// integration tests, which seed it directly and inspect it after requests.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, Option<String>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a user with the given profile image URL.
    pub fn insert_user(&self, id: impl Into<String>, profile_image: Option<&str>) {
        self.users
            .insert(id.into(), profile_image.map(str::to_string));
    }

    /// Returns the stored profile image URL for a user, or `None` if the
    /// user does not exist.
    pub fn profile_image(&self, id: &str) -> Option<Option<String>> {
        self.users.get(id).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user(&self, id: &Identifier) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(id.key()).map(|entry| UserRecord {
            id: entry.key().clone(),
            profile_image: entry.value().clone(),
        }))
    }

    async fn set_profile_image(
        &self,
        user_id: &str,
        image_url: Option<&str>,
    ) -> Result<(), StoreError> {
        if let Some(mut entry) = self.users.get_mut(user_id) {
            *entry = image_url.map(str::to_string);
        }
        Ok(())
    }
}
