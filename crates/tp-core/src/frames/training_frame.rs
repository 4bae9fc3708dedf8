//! Validated training payload: feature rows plus target values.

use crate::{CoreError, Result as CoreErrorResult};

use serde_json::Value;

/// Feature rows and targets, validated for shape before anything is sent
/// upstream. Cells are untyped JSON values; the upstream service handles
/// mixed numeric/categorical columns itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingFrame {
    pub features: Vec<Vec<Value>>,
    pub target: Vec<Value>,
    pub feature_names: Option<Vec<String>>,
}

impl TrainingFrame {
    /// Validate shape invariants:
    /// - at least one row, no empty rows
    /// - all rows have the same column count
    /// - row count matches target count
    /// - feature_names length matches the column count when provided
    #[track_caller]
    pub fn new(
        features: Vec<Vec<Value>>,
        target: Vec<Value>,
        feature_names: Option<Vec<String>>,
    ) -> CoreErrorResult<Self> {
        if features.is_empty() {
            return Err(CoreError::validation_field(
                "Features list cannot be empty",
                "features",
            ));
        }

        let columns = features[0].len();
        if columns == 0 {
            return Err(CoreError::validation_field(
                "Feature rows cannot be empty lists",
                "features",
            ));
        }

        if features.iter().any(|row| row.len() != columns) {
            return Err(CoreError::validation_field(
                "All feature rows must have the same number of columns",
                "features",
            ));
        }

        if target.is_empty() {
            return Err(CoreError::validation_field(
                "Target list cannot be empty",
                "target",
            ));
        }

        if features.len() != target.len() {
            return Err(CoreError::validation_field(
                format!(
                    "Number of feature rows ({}) must match the number of target values ({})",
                    features.len(),
                    target.len()
                ),
                "target",
            ));
        }

        if let Some(ref names) = feature_names {
            if names.len() != columns {
                return Err(CoreError::validation_field(
                    format!(
                        "Number of feature names ({}) must match the number of columns ({})",
                        names.len(),
                        columns
                    ),
                    "feature_names",
                ));
            }
        }

        Ok(Self {
            features,
            target,
            feature_names,
        })
    }

    pub fn feature_count(&self) -> i32 {
        self.features[0].len() as i32
    }

    pub fn sample_count(&self) -> i32 {
        self.features.len() as i32
    }
}
