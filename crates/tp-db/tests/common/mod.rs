#![allow(dead_code)]

//! Shared test infrastructure for tp-db repository tests

use tp_core::{Identity, ModelRecord};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Create an in-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    tp_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build an identity with plausible (non-secret) stored values
pub fn sample_identity(tag: &str) -> Identity {
    Identity::new(
        format!("fingerprint-{}", tag),
        format!("$2b$12$hash-{}", tag),
        format!("ciphertext-{}", tag),
    )
}

/// Build a model record owned by the given identity
pub fn sample_model(owner_id: Uuid, handle: &str) -> ModelRecord {
    ModelRecord::new(
        handle.to_string(),
        owner_id,
        3,
        10,
        Some(vec!["f1".into(), "f2".into(), "f3".into()]),
        Some(serde_json::json!({"device": "cpu"})),
    )
}
