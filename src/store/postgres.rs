use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::{Identifier, UserRecord};
use crate::store::{StoreError, UserStore};

/// Production user store over a shared Postgres connection pool.
///
/// Expects a `users` relation with `id TEXT PRIMARY KEY` and
/// `profile_image TEXT NULL`.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_user(&self, id: &Identifier) -> Result<Option<UserRecord>, StoreError> {
        debug!(key = %id.key(), "Looking up user");

        let user =
            sqlx::query_as::<_, UserRecord>("SELECT id, profile_image FROM users WHERE id = $1")
                .bind(id.key())
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    async fn set_profile_image(
        &self,
        user_id: &str,
        image_url: Option<&str>,
    ) -> Result<(), StoreError> {
        debug!(user_id = %user_id, image_url = ?image_url, "Updating profile image");

        sqlx::query("UPDATE users SET profile_image = $1 WHERE id = $2")
            .bind(image_url)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
