#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Once};

use portrait::store::{InMemoryUserStore, UserStore};
use portrait::utils::public_path::public_image_dir;
use reqwest::multipart;
use tempdir::TempDir;
use tokio::net::TcpListener;

/// Canonical 24-hex identifier used by most tests.
pub const TEST_USER_ID: &str = "507f1f77bcf86cd799439011";

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("portrait=debug")
            .with_test_writer()
            .init();
    });
}

/// A running application instance plus the handles tests inspect afterward.
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryUserStore>,
    pub public_root: PathBuf,
    // Removed with the TestApp; keeps the public root alive for its lifetime
    _public_dir: TempDir,
}

impl TestApp {
    /// The on-disk directory where uploaded images land.
    pub fn images_dir(&self) -> PathBuf {
        public_image_dir(&self.public_root)
    }

    /// Names of image files currently on disk, in no particular order.
    pub fn image_files_on_disk(&self) -> Vec<String> {
        match std::fs::read_dir(self.images_dir()) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Spawns the application over a fresh in-memory store and a temporary
/// public root, and returns its address and handles for inspection.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> TestApp {
    init_tracing_once();

    let store = Arc::new(InMemoryUserStore::new());
    let public_dir = TempDir::new("portrait-test").expect("Failed to create temp public root");
    let public_root = public_dir.path().to_path_buf();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app_store: Arc<dyn UserStore> = Arc::clone(&store) as Arc<dyn UserStore>;
    let app = portrait::app_with_store(app_store, public_root.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    TestApp {
        address,
        store,
        public_root,
        _public_dir: public_dir,
    }
}

/// Creates a simple 1x1 PNG image and returns its byte representation.
pub fn create_test_image() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, // IHDR chunk length
        0x49, 0x48, 0x44, 0x52, // IHDR
        0x00, 0x00, 0x00, 0x01, // Width: 1
        0x00, 0x00, 0x00, 0x01, // Height: 1
        0x08, 0x02, 0x00, 0x00,
        0x00, // Bit depth: 8, Color type: 2 (RGB), Compression: 0, Filter: 0, Interlace: 0
        0x90, 0x77, 0x53, 0xDE, // CRC
        0x00, 0x00, 0x00, 0x0C, // IDAT chunk length
        0x49, 0x44, 0x41, 0x54, // IDAT
        0x08, 0x99, 0x01, 0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, // Image data
        0x02, 0x00, 0x01, 0xE5, // CRC
        0x00, 0x00, 0x00, 0x00, // IEND chunk length
        0x49, 0x45, 0x4E, 0x44, // IEND
        0xAE, 0x42, 0x60, 0x82, // CRC
    ]
}

/// Uploads `data` as the `file` field for the given user id.
pub async fn upload_image(
    client: &reqwest::Client,
    address: &str,
    user_id: &str,
    data: Vec<u8>,
    mime: &str,
) -> reqwest::Response {
    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(data)
            .file_name("upload.bin")
            .mime_str(mime)
            .unwrap(),
    );

    client
        .post(format!("{address}/api/user/{user_id}/image"))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload image")
}
