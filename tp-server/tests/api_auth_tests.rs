//! Registration and bearer authentication over the full router.
mod common;

use crate::common::{MockUpstream, error_code, register, send_json, test_app};

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_setup_returns_fresh_api_key() {
    let (app, _pool) = test_app(MockUpstream::accepting(&["good-token"])).await;

    let api_key = register(&app, "good-token").await;
    assert!(!api_key.is_empty());

    // The minted key authenticates follow-up requests.
    let (status, body) = send_json(&app, "GET", "/api/v1/models", Some(&api_key), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["models"], json!([]));
}

#[tokio::test]
async fn test_setup_rejected_token_is_unauthenticated() {
    let (app, pool) = test_app(MockUpstream::accepting(&["good-token"])).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/v1/auth/setup",
        None,
        Some(json!({ "upstream_token": "wrong-token" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHENTICATED");

    // Nothing was persisted for the failed registration.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_setup_usage_limited_token_registers() {
    let mut upstream = MockUpstream::accepting(&[]);
    upstream.limited_tokens = vec!["limited-token"];
    let (app, _pool) = test_app(upstream).await;

    let api_key = register(&app, "limited-token").await;

    let (status, _body) = send_json(&app, "GET", "/api/v1/models", Some(&api_key), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_setup_upstream_unreachable_is_503() {
    let (app, _pool) = test_app(MockUpstream::unreachable()).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/v1/auth/setup",
        None,
        Some(json!({ "upstream_token": "any" })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error_code(&body), "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn test_missing_authorization_is_401() {
    let (app, _pool) = test_app(MockUpstream::accepting(&["good-token"])).await;

    let (status, body) = send_json(&app, "GET", "/api/v1/models", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_unknown_api_key_is_401() {
    let (app, _pool) = test_app(MockUpstream::accepting(&["good-token"])).await;
    register(&app, "good-token").await;

    let (status, body) = send_json(
        &app,
        "GET",
        "/api/v1/models",
        Some("not-a-real-key"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_401() {
    let (app, _pool) = test_app(MockUpstream::accepting(&["good-token"])).await;
    let api_key = register(&app, "good-token").await;

    let request = http::Request::builder()
        .method("GET")
        .uri("/api/v1/models")
        .header(http::header::AUTHORIZATION, format!("Basic {api_key}"))
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_distinct_registrations_yield_distinct_keys() {
    let (app, pool) = test_app(MockUpstream::accepting(&["token-a", "token-b"])).await;

    let key_a = register(&app, "token-a").await;
    let key_b = register(&app, "token-b").await;
    assert_ne!(key_a, key_b);

    // Stored hashes and ciphertexts differ per registration.
    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT api_key_hash, encrypted_upstream_token FROM identities")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].0, rows[1].0);
    assert_ne!(rows[0].1, rows[1].1);
}
