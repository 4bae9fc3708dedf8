//! Identity repository.
//!
//! Lookup is keyed by the SHA-256 fingerprint of the raw API key, backed by
//! the UNIQUE index on `api_key_fingerprint`. The bcrypt hash is only read
//! back for final verification - never scanned.

use crate::{DbError, Result as DbErrorResult};

use tp_core::Identity;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, api_key_fingerprint, api_key_hash,
                    encrypted_upstream_token, created_at
                ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.api_key_fingerprint)
        .bind(&identity.api_key_hash)
        .bind(&identity.encrypted_upstream_token)
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_fingerprint(&self, fingerprint: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, api_key_fingerprint, api_key_hash,
                    encrypted_upstream_token, created_at
                FROM identities
                WHERE api_key_fingerprint = ?
            "#,
        )
        .bind(fingerprint)
        .fetch_optional(&self.pool)
        .await?;

        row.map(identity_from_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, api_key_fingerprint, api_key_hash,
                    encrypted_upstream_token, created_at
                FROM identities
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(identity_from_row).transpose()
    }
}

fn identity_from_row(row: SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt(format!("Invalid UUID in identities.id: {}", e)))?,
        api_key_fingerprint: row.try_get("api_key_fingerprint")?,
        api_key_hash: row.try_get("api_key_hash")?,
        encrypted_upstream_token: row.try_get("encrypted_upstream_token")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::corrupt("Invalid timestamp in identities.created_at"))?,
    })
}
