//! Shared fixtures: in-memory database, mock upstream, request helpers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use tp_auth::{CredentialProxy, TokenCipher};
use tp_core::{InferenceFrame, OutputKind, TaskKind, TrainingFrame};
use tp_db::{IdentityRepository, ModelRepository};
use tp_server::{AppState, build_router};
use tp_upstream::{Result as UpstreamResult, TokenStatus, UpstreamClient, UpstreamError};

pub const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Upstream double with a fixed set of accepted tokens and canned
/// fit/predict answers.
pub struct MockUpstream {
    pub valid_tokens: Vec<&'static str>,
    pub limited_tokens: Vec<&'static str>,
    pub reachable: bool,
    /// Fail fit calls only, after registration already succeeded.
    pub fit_unavailable: bool,
    /// Reject the token on fit, as if it was revoked after registration.
    pub fit_rejects_token: bool,
    pub predictions: Value,
}

impl MockUpstream {
    pub fn accepting(tokens: &[&'static str]) -> Self {
        Self {
            valid_tokens: tokens.to_vec(),
            limited_tokens: vec![],
            reachable: true,
            fit_unavailable: false,
            fit_rejects_token: false,
            predictions: json!([0, 1, 0]),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            valid_tokens: vec![],
            limited_tokens: vec![],
            reachable: false,
            fit_unavailable: false,
            fit_rejects_token: false,
            predictions: json!([]),
        }
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    async fn verify_token(&self, token: &str) -> UpstreamResult<TokenStatus> {
        if !self.reachable {
            return Err(UpstreamError::unavailable("Connection error"));
        }
        if self.valid_tokens.contains(&token) {
            return Ok(TokenStatus::Valid);
        }
        if self.limited_tokens.contains(&token) {
            return Ok(TokenStatus::UsageLimited);
        }
        Err(UpstreamError::auth("401 Authentication failed"))
    }

    async fn fit(
        &self,
        _token: &str,
        _frame: &TrainingFrame,
        _train_config: Option<&Value>,
    ) -> UpstreamResult<String> {
        if !self.reachable || self.fit_unavailable {
            return Err(UpstreamError::unavailable("Connection error"));
        }
        if self.fit_rejects_token {
            return Err(UpstreamError::auth(
                "401 invalid access token for account upstream-acct-z9@vendor",
            ));
        }
        Ok("uid-mock-1".to_string())
    }

    async fn predict(
        &self,
        _token: &str,
        _handle: &str,
        _frame: &InferenceFrame,
        _task: TaskKind,
        _output: OutputKind,
    ) -> UpstreamResult<Value> {
        if !self.reachable {
            return Err(UpstreamError::unavailable("Connection error"));
        }
        Ok(self.predictions.clone())
    }
}

pub async fn test_app(upstream: MockUpstream) -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("in-memory pool");
    tp_db::MIGRATOR.run(&pool).await.expect("migrations");

    let upstream: Arc<dyn UpstreamClient> = Arc::new(upstream);
    let proxy = Arc::new(CredentialProxy::new(
        IdentityRepository::new(pool.clone()),
        ModelRepository::new(pool.clone()),
        upstream.clone(),
        Arc::new(TokenCipher::new(TEST_SECRET).unwrap()),
    ));

    let state = AppState {
        pool: pool.clone(),
        proxy,
        upstream,
    };

    (build_router(state), pool)
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    api_key: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {key}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

pub async fn send_csv(
    app: &Router,
    uri: &str,
    api_key: Option<&str>,
    csv: &str,
) -> (StatusCode, Value) {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"data.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{BOUNDARY}--\r\n"
    );

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(key) = api_key {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {key}"));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Registers `token` and returns the minted API key.
pub async fn register(app: &Router, token: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/auth/setup",
        None,
        Some(json!({ "upstream_token": token })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "setup failed: {body}");
    body["api_key"].as_str().expect("api_key in body").to_string()
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or("")
}

pub fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or("")
}
