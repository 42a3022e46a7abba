//! # Portrait - Profile Image Backend
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the per-user image endpoint
//! - [`models`] - Application state, user record, and identifier parsing
//! - [`store`] - Narrow persistence capability (lookup / update profile image)
//! - [`utils`] - File naming, public path resolution, and constants

pub mod error;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::error;

use crate::handlers::{clear_image, health_check, image_preflight, upload_image};
use crate::models::AppState;
use crate::store::{PgUserStore, UserStore};
use crate::utils::constant::{ALLOWED_ORIGIN, PUBLIC_DIR, PUBLIC_IMAGE_PREFIX};
use crate::utils::public_path::public_image_dir;

/// Creates an Axum router backed by the Postgres user store.
///
/// This is a convenience function that calls [`app_with_store`] with a
/// [`PgUserStore`] over the given pool and the public root taken from the
/// `PUBLIC_DIR` environment variable.
#[inline]
pub fn app(db_pool: PgPool) -> Router {
    app_with_store(
        Arc::new(PgUserStore::new(db_pool)),
        PathBuf::from(PUBLIC_DIR.as_str()),
    )
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `store` - User store capability used for lookups and profile image updates
/// * `public_root` - Root of the public directory; uploaded images live under
///   its `profile-images/` subtree and are served from there
///
/// # Routes
///
/// - `GET /health-check` - Liveness probe
/// - `POST /api/user/{id}/image` - Upload (replace) the user's profile image
/// - `DELETE /api/user/{id}/image` - Clear the user's profile image
/// - `OPTIONS /api/user/{id}/image` - CORS preflight
/// - `GET /profile-images/*` - Static serving of stored images
///
/// Every response carries the CORS headers configured via `ALLOWED_ORIGIN`.
pub fn app_with_store(store: Arc<dyn UserStore>, public_root: PathBuf) -> Router {
    let images_dir = public_image_dir(&public_root);
    let state = Arc::new(AppState::new(store, public_root));

    Router::new()
        .route("/health-check", get(health_check))
        .route(
            "/api/user/{id}/image",
            post(upload_image)
                .delete(clear_image)
                .options(image_preflight),
        )
        .nest_service(
            PUBLIC_IMAGE_PREFIX.trim_end_matches('/'),
            ServeDir::new(images_dir),
        )
        .layer(cors_layer())
        .with_state(state)
}

/// Builds the CORS layer applied to every route.
///
/// The allowed origin comes from shared configuration (`ALLOWED_ORIGIN`);
/// `"*"` or an unparseable value falls back to allowing any origin.
fn cors_layer() -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    match ALLOWED_ORIGIN.as_str() {
        "*" => layer.allow_origin(Any),
        origin => match origin.parse::<HeaderValue>() {
            Ok(value) => layer.allow_origin(value),
            Err(e) => {
                error!(origin = %origin, error = %e, "Invalid ALLOWED_ORIGIN value, allowing any origin");
                layer.allow_origin(Any)
            }
        },
    }
}
