//! Model record repository.
//!
//! Records are insert-once and read-only afterwards; there is no update or
//! delete path.

use crate::{DbError, Result as DbErrorResult};

use tp_core::ModelRecord;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ModelRepository {
    pool: SqlitePool,
}

impl ModelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &ModelRecord) -> DbErrorResult<()> {
        let feature_names = record
            .feature_names
            .as_ref()
            .map(|names| serde_json::to_string(names))
            .transpose()
            .map_err(|e| DbError::corrupt(format!("Cannot serialize feature_names: {}", e)))?;
        let train_config = record
            .train_config
            .as_ref()
            .map(|config| serde_json::to_string(config))
            .transpose()
            .map_err(|e| DbError::corrupt(format!("Cannot serialize train_config: {}", e)))?;

        sqlx::query(
            r#"
                INSERT INTO model_records (
                    id, upstream_handle, owner_id, feature_count, sample_count,
                    feature_names, train_config, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.upstream_handle)
        .bind(record.owner_id.to_string())
        .bind(record.feature_count)
        .bind(record.sample_count)
        .bind(feature_names)
        .bind(train_config)
        .bind(record.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<ModelRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, upstream_handle, owner_id, feature_count, sample_count,
                    feature_names, train_config, created_at
                FROM model_records
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(record_from_row).transpose()
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<ModelRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, upstream_handle, owner_id, feature_count, sample_count,
                    feature_names, train_config, created_at
                FROM model_records
                WHERE owner_id = ?
                ORDER BY created_at DESC, id
            "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(record_from_row).collect()
    }
}

fn record_from_row(row: SqliteRow) -> DbErrorResult<ModelRecord> {
    let id: String = row.try_get("id")?;
    let owner_id: String = row.try_get("owner_id")?;
    let feature_names: Option<String> = row.try_get("feature_names")?;
    let train_config: Option<String> = row.try_get("train_config")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(ModelRecord {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt(format!("Invalid UUID in model_records.id: {}", e)))?,
        upstream_handle: row.try_get("upstream_handle")?,
        owner_id: Uuid::parse_str(&owner_id).map_err(|e| {
            DbError::corrupt(format!("Invalid UUID in model_records.owner_id: {}", e))
        })?,
        feature_count: row.try_get("feature_count")?,
        sample_count: row.try_get("sample_count")?,
        feature_names: feature_names
            .map(|names| serde_json::from_str(&names))
            .transpose()
            .map_err(|e| {
                DbError::corrupt(format!("Invalid JSON in model_records.feature_names: {}", e))
            })?,
        train_config: train_config
            .map(|config| serde_json::from_str(&config))
            .transpose()
            .map_err(|e| {
                DbError::corrupt(format!("Invalid JSON in model_records.train_config: {}", e))
            })?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::corrupt("Invalid timestamp in model_records.created_at"))?,
    })
}
