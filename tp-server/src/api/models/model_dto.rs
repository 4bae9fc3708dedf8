use chrono::{DateTime, Utc};
use serde::Serialize;
use tp_core::ModelRecord;
use uuid::Uuid;

/// Model metadata returned to the owner. The upstream handle stays private.
#[derive(Debug, Serialize)]
pub struct ModelDto {
    pub model_id: Uuid,
    pub feature_count: i32,
    pub sample_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl From<ModelRecord> for ModelDto {
    fn from(record: ModelRecord) -> Self {
        Self {
            model_id: record.id,
            feature_count: record.feature_count,
            sample_count: record.sample_count,
            feature_names: record.feature_names,
            created_at: record.created_at,
        }
    }
}
