//! Integration tests for the clipbox HTTP API
//!
//! These tests run the real router over a loopback socket, backed by the
//! in-memory store, and drive it with a plain HTTP client.

use std::sync::Arc;

use clipbox::{
    http::{create_router, AppState},
    storage::MemoryStore,
};
use serde_json::{json, Value};

/// Spawn the API on an ephemeral port and return its base URL.
async fn spawn_server(max_content_bytes: usize) -> String {
    let state = AppState {
        store: Arc::new(MemoryStore::new(max_content_bytes)),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{}", addr)
}

async fn post_content(client: &reqwest::Client, base: &str, content: &str) -> reqwest::Response {
    client
        .post(format!("{}/clipboard", base))
        .json(&json!({ "content": content }))
        .send()
        .await
        .expect("POST /clipboard")
}

async fn get_item(client: &reqwest::Client, base: &str) -> Value {
    client
        .get(format!("{}/clipboard", base))
        .send()
        .await
        .expect("GET /clipboard")
        .json()
        .await
        .expect("response body")
}

#[tokio::test]
async fn fetch_before_any_write_returns_empty_text_record() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let item = get_item(&client, &base).await;
    assert_eq!(item["content"], "");
    assert_eq!(item["type"], "text");
    assert!(item["language"].is_null());
    assert!(item["timestamp"].is_i64());
}

#[tokio::test]
async fn post_json_is_classified_and_pretty_printed() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let response = post_content(&client, &base, "{\"a\":1}").await;
    assert_eq!(response.status(), 200);

    let item: Value = response.json().await.unwrap();
    assert_eq!(item["type"], "json");
    assert_eq!(item["language"], "json");
    assert_eq!(item["content"], "{\n  \"a\": 1\n}");

    // A subsequent fetch sees the same stored record
    let fetched = get_item(&client, &base).await;
    assert_eq!(fetched["content"], "{\n  \"a\": 1\n}");
}

#[tokio::test]
async fn post_sql_statement_is_classified_sql() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let response = post_content(&client, &base, "SELECT id, name FROM users WHERE age > 30").await;
    assert_eq!(response.status(), 200);

    let item: Value = response.json().await.unwrap();
    assert_eq!(item["type"], "sql");
    assert_eq!(item["language"], "sql");
    assert_eq!(item["content"], "SELECT id, name FROM users WHERE age > 30");
}

#[tokio::test]
async fn post_python_source_is_classified_python() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let response = post_content(&client, &base, "def handler(event):\n    return event").await;
    let item: Value = response.json().await.unwrap();
    assert_eq!(item["type"], "python");
    assert_eq!(item["language"], "python");
}

#[tokio::test]
async fn delete_clears_to_empty_record() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    post_content(&client, &base, "something worth clearing").await;

    let response = client
        .delete(format!("{}/clipboard", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let item = get_item(&client, &base).await;
    assert_eq!(item["content"], "");
    assert_eq!(item["type"], "text");
    assert!(item["language"].is_null());
}

#[tokio::test]
async fn oversized_payload_is_rejected_with_413() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    // One byte over the ceiling
    let response = post_content(&client, &base, &"x".repeat(8193)).await;
    assert_eq!(response.status(), 413);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");

    // The store was never touched
    let item = get_item(&client, &base).await;
    assert_eq!(item["content"], "");
}

#[tokio::test]
async fn payload_at_exact_ceiling_is_accepted() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let response = post_content(&client, &base, &"x".repeat(8192)).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn missing_or_empty_content_is_a_bad_request() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    // Missing field
    let response = client
        .post(format!("{}/clipboard", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_REQUEST");

    // Wrong type
    let response = client
        .post(format!("{}/clipboard", base))
        .json(&json!({ "content": 42 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Empty string
    let response = post_content(&client, &base, "").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn repeated_fetches_return_identical_records() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    post_content(&client, &base, "# Heading\n\nsome markdown").await;

    let first = get_item(&client, &base).await;
    let second = get_item(&client, &base).await;
    assert_eq!(first, second, "reads must not mutate the stored record");
    assert_eq!(first["type"], "markdown");
}

#[tokio::test]
async fn last_write_wins() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    post_content(&client, &base, "first").await;
    post_content(&client, &base, "second").await;

    let item = get_item(&client, &base).await;
    assert_eq!(item["content"], "second");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["healthy"], true);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn debug_endpoint_reports_readable_backend() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/clipboard/debug", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["configured"], true);
    assert_eq!(body["can_read"], true);
    assert!(body.get("error").is_none() || body["error"].is_null());
}

#[tokio::test]
async fn index_page_serves_the_ui() {
    let base = spawn_server(8192).await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));
    let body = response.text().await.unwrap();
    assert!(body.contains("clipbox"));
}
