use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, warn};

use portrait::store::{InMemoryUserStore, PgUserStore, UserStore};
use portrait::utils::constant::PUBLIC_DIR;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portrait=debug".into()),
        )
        .init();

    let store: Arc<dyn UserStore> = match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&url)
                .await
                .expect("Failed to connect to Postgres");
            info!("Using Postgres user store");
            Arc::new(PgUserStore::new(pool))
        }
        Err(_) => {
            warn!("DATABASE_URL not set, falling back to in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    };

    let app = portrait::app_with_store(store, PathBuf::from(PUBLIC_DIR.as_str()));

    let listener = TcpListener::bind("0.0.0.0:8090").await.unwrap();
    info!("Server starting at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
