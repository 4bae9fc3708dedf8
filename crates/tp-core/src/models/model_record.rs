//! Model record - maps a locally issued model id to the upstream training
//! handle and the identity that owns it.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Created once per successful training call, read-only thereafter.
/// No deletion path exists in the current design.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    /// Local model id returned to callers.
    pub id: Uuid,
    /// Opaque train-set uid returned by the upstream fit call.
    pub upstream_handle: String,
    pub owner_id: Uuid,
    pub feature_count: i32,
    pub sample_count: i32,
    pub feature_names: Option<Vec<String>>,
    /// Configuration passed through to the upstream fit call, if any.
    pub train_config: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl ModelRecord {
    pub fn new(
        upstream_handle: String,
        owner_id: Uuid,
        feature_count: i32,
        sample_count: i32,
        feature_names: Option<Vec<String>>,
        train_config: Option<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            upstream_handle,
            owner_id,
            feature_count,
            sample_count,
            feature_names,
            train_config,
            created_at: Utc::now(),
        }
    }

    /// True when `identity_id` owns this record.
    pub fn is_owned_by(&self, identity_id: Uuid) -> bool {
        self.owner_id == identity_id
    }
}
