#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use client::TextClient;
use mockito::Matcher;
use serde_json::json;

// ============================================================================
// Health checks
// ============================================================================

#[tokio::test]
async fn test_health_check_healthy() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"healthy","timestamp":"2026-01-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let client = TextClient::new(server.url()).unwrap();
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
async fn test_health_check_unhealthy() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(500)
        .create_async()
        .await;

    let client = TextClient::new(server.url()).unwrap();
    assert!(!client.health_check().await.unwrap());
}

// ============================================================================
// Submitting
// ============================================================================

#[tokio::test]
async fn test_submit_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/submit")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"text": "hello"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status":"success","message":"Text saved successfully","version":"0.1.0","timestamp":"2026-01-01T00:00:00Z"}"#,
        )
        .create_async()
        .await;

    let client = TextClient::new(server.url()).unwrap();
    let message = client.submit("hello").await.unwrap();

    assert_eq!(message, "Text saved successfully");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_rejection_detail() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/submit")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Bad Request","details":"No text provided"}"#)
        .create_async()
        .await;

    let client = TextClient::new(server.url()).unwrap();
    let err = client.submit("").await.unwrap_err();

    assert!(err.to_string().contains("No text provided"));
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_parses_entries() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/texts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"id":2,"text":"second","created_at":"2026-01-02T00:00:00Z"},
                {"id":1,"text":"first","created_at":"2026-01-01T00:00:00Z"}
            ]"#,
        )
        .create_async()
        .await;

    let client = TextClient::new(server.url()).unwrap();
    let texts = client.list().await.unwrap();

    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].id, 2);
    assert_eq!(texts[0].text, "second");
    assert_eq!(texts[1].id, 1);
}

#[tokio::test]
async fn test_list_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/texts")
        .with_status(503)
        .create_async()
        .await;

    let client = TextClient::new(server.url()).unwrap();
    assert!(client.list().await.is_err());
}
