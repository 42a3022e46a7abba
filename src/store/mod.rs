//! # User Store
//!
//! The persistence layer is an external collaborator; this module exposes it
//! to the handlers only through the narrow [`UserStore`] capability: look a
//! user up by a normalized identifier, and overwrite the stored profile
//! image URL. Production uses [`PgUserStore`] over a shared connection pool;
//! [`InMemoryUserStore`] backs local development and the integration tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

use crate::models::{Identifier, UserRecord};

/// Errors surfaced by a user store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Lookup/update capability over the user collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds the user matching the identifier's filter key, if any.
    async fn find_user(&self, id: &Identifier) -> Result<Option<UserRecord>, StoreError>;

    /// Overwrites the user's stored profile image URL (`None` clears it).
    ///
    /// Keyed by the user's primary id, not the caller's filter, so an
    /// embedded or literal lookup still updates the right record.
    async fn set_profile_image(
        &self,
        user_id: &str,
        image_url: Option<&str>,
    ) -> Result<(), StoreError>;
}
