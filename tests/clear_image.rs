mod common;

use common::{TEST_USER_ID, spawn_app};
use serde_json::Value;

async fn clear_image(
    client: &reqwest::Client,
    address: &str,
    user_id: &str,
) -> reqwest::Response {
    client
        .delete(format!("{address}/api/user/{user_id}/image"))
        .send()
        .await
        .expect("Failed to send clear request")
}

#[tokio::test]
async fn test_clear_image_removes_file_and_nulls_record() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // Seed a user whose stored URL points at a real file on disk
    std::fs::create_dir_all(app.images_dir()).unwrap();
    std::fs::write(app.images_dir().join("x.jpg"), b"old image bytes").unwrap();
    app.store
        .insert_user(TEST_USER_ID, Some("/profile-images/x.jpg"));

    let response = clear_image(&client, &app.address, TEST_USER_ID).await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let response_json: Value = response.json().await.unwrap();
    assert_eq!(response_json["message"], "OK");

    assert_eq!(app.store.profile_image(TEST_USER_ID), Some(None));
    assert!(!app.images_dir().join("x.jpg").exists());
}

#[tokio::test]
async fn test_clear_image_tolerates_already_absent_file() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // Stored URL references a file that was never written
    app.store
        .insert_user(TEST_USER_ID, Some("/profile-images/ghost.png"));

    let response = clear_image(&client, &app.address, TEST_USER_ID).await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(app.store.profile_image(TEST_USER_ID), Some(None));
}

#[tokio::test]
async fn test_clear_image_with_no_image_set() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    app.store.insert_user(TEST_USER_ID, None);

    let response = clear_image(&client, &app.address, TEST_USER_ID).await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(app.store.profile_image(TEST_USER_ID), Some(None));
}

#[tokio::test]
async fn test_clear_image_unknown_user() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = clear_image(&client, &app.address, "not-a-real-id").await;

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let response_json: Value = response.json().await.unwrap();
    assert_eq!(response_json["message"], "User not found");
}

#[tokio::test]
async fn test_clear_image_never_deletes_outside_public_subtree() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // A sentinel file directly under the public root, outside profile-images/
    std::fs::create_dir_all(&app.public_root).unwrap();
    let sentinel = app.public_root.join("keep.txt");
    std::fs::write(&sentinel, b"do not delete").unwrap();

    // Corrupted stored URL trying to reach the sentinel
    app.store
        .insert_user(TEST_USER_ID, Some("/profile-images/../keep.txt"));

    let response = clear_image(&client, &app.address, TEST_USER_ID).await;

    // The clear still succeeds; the traversal URL is rejected, not followed
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(app.store.profile_image(TEST_USER_ID), Some(None));
    assert!(sentinel.exists());
}
