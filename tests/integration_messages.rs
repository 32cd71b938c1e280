#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, missing_debug_implementations, unreachable_pub)]
use reqwest::StatusCode;
mod common;

#[tokio::test]
async fn test_list_starts_empty() {
    let app = common::TestApp::spawn().await;

    assert!(app.list_messages().await.is_empty());
}

#[tokio::test]
async fn test_create_then_get_roundtrip() {
    let app = common::TestApp::spawn().await;

    let created = app.create_message("Hello", "First post", "https://example.com/a.png").await;

    let id = created["id"].as_str().unwrap();
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["body"], "First post");
    assert_eq!(created["attachmentURL"], "https://example.com/a.png");
    assert!(created["createdAt"].as_i64().is_some());
    // updatedAt is absent until the first update, not null
    assert!(created.as_object().unwrap().get("updatedAt").is_none());

    let resp = app.client.get(format!("{}/v1/messages/{}", app.server_url, id)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_grows_by_one_per_create() {
    let app = common::TestApp::spawn().await;

    let first = app.create_message("one", "b", "").await;
    assert_eq!(app.list_messages().await.len(), 1);

    let second = app.create_message("two", "b", "").await;
    let listed = app.list_messages().await;
    assert_eq!(listed.len(), 2);

    assert_ne!(first["id"], second["id"]);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));
}

#[tokio::test]
async fn test_update_preserves_identity_and_stamps_updated_at() {
    let app = common::TestApp::spawn().await;

    let created = app.create_message("draft", "body", "").await;
    let id = created["id"].as_str().unwrap();

    let resp = app
        .client
        .put(format!("{}/v1/messages/{}", app.server_url, id))
        .json(&serde_json::json!({
            "title": "final",
            "body": "new body",
            "attachmentURL": "https://example.com/b.png",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["title"], "final");
    assert_eq!(updated["body"], "new body");
    assert_eq!(updated["attachmentURL"], "https://example.com/b.png");
    assert!(updated["updatedAt"].as_i64().unwrap() >= updated["createdAt"].as_i64().unwrap());

    // the stored record matches what update returned
    let fetched: serde_json::Value = app
        .client
        .get(format!("{}/v1/messages/{}", app.server_url, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_delete_returns_last_state_and_removes() {
    let app = common::TestApp::spawn().await;

    // the full board lifecycle: create, update, delete, get
    let created = app.create_message("Hi", "B", "").await;
    let id = created["id"].as_str().unwrap().to_string();

    let updated: serde_json::Value = app
        .client
        .put(format!("{}/v1/messages/{}", app.server_url, id))
        .json(&serde_json::json!({ "title": "Hi2", "body": "B", "attachmentURL": "" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["title"], "Hi2");

    let resp =
        app.client.delete(format!("{}/v1/messages/{}", app.server_url, id)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(removed, updated);

    let resp = app.client.get(format!("{}/v1/messages/{}", app.server_url, id)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(app.list_messages().await.iter().all(|m| m["id"] != updated["id"]));
}
