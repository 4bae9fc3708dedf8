
use std::sync::Arc;

use crate::{CredentialProxy, TokenCipher};

use async_trait::async_trait;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tp_core::{InferenceFrame, OutputKind, TaskKind, TrainingFrame};
use tp_db::{IdentityRepository, ModelRepository};
use tp_upstream::{Result as UpstreamResult, TokenStatus, UpstreamClient, UpstreamError};

pub const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// Upstream double that accepts a fixed set of tokens.
pub struct MockUpstream {
    pub valid_tokens: Vec<&'static str>,
    pub limited_tokens: Vec<&'static str>,
    pub reachable: bool,
}

impl MockUpstream {
    pub fn accepting(token: &'static str) -> Self {
        Self {
            valid_tokens: vec![token],
            limited_tokens: vec![],
            reachable: true,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            valid_tokens: vec![],
            limited_tokens: vec![],
            reachable: false,
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
        Ok("uid-test".to_string())
    }

    async fn predict(
        &self,
        _token: &str,
        _handle: &str,
        _frame: &InferenceFrame,
        _task: TaskKind,
        _output: OutputKind,
    ) -> UpstreamResult<Value> {
        Ok(json!([0]))
    }
}

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("in-memory pool");
    tp_db::MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

pub async fn test_proxy(upstream: MockUpstream) -> (CredentialProxy, SqlitePool) {
    let pool = test_pool().await;
    let proxy = CredentialProxy::new(
        IdentityRepository::new(pool.clone()),
        ModelRepository::new(pool.clone()),
        Arc::new(upstream),
        Arc::new(TokenCipher::new(TEST_SECRET).unwrap()),
    );
    (proxy, pool)
}
