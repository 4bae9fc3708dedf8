use serde::Deserialize;
use tp_core::{OutputKind, TaskKind};

#[derive(Debug, Deserialize)]
pub struct PredictUploadQuery {
    /// "classification" or "regression" (required)
    pub task: TaskKind,

    /// "labels" (default) or "probabilities"; classification only
    #[serde(default)]
    pub output_type: Option<OutputKind>,
}
