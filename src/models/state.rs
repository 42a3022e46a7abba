use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::store::UserStore;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Narrow lookup/update capability over the user collection.
    pub store: Arc<dyn UserStore>,
    /// Root of the public directory; images live under its
    /// `profile-images/` subtree.
    pub public_root: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided store and public root.
    pub fn new(store: Arc<dyn UserStore>, public_root: PathBuf) -> Self {
        info!("Initializing application state");
        debug!(public_root = %public_root.display(), "Using public root");

        Self { store, public_root }
    }
}
