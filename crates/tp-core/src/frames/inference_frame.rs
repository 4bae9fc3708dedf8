//! Validated prediction payload: feature rows only.

use crate::{CoreError, Result as CoreErrorResult};

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct InferenceFrame {
    pub features: Vec<Vec<Value>>,
}

impl InferenceFrame {
    /// Validate shape: at least one row, rectangular, non-empty rows.
    #[track_caller]
    pub fn new(features: Vec<Vec<Value>>) -> CoreErrorResult<Self> {
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

        Ok(Self { features })
    }

    pub fn feature_count(&self) -> i32 {
        self.features[0].len() as i32
    }

    /// Check the column count against what a trained model expects.
    #[track_caller]
    pub fn check_columns(&self, expected: i32) -> CoreErrorResult<()> {
        let actual = self.feature_count();
        if actual != expected {
            return Err(CoreError::validation(format!(
                "Feature data has {} columns but the model expects {}",
                actual, expected
            )));
        }
        Ok(())
    }
}
