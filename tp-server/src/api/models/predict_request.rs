use serde::Deserialize;
use serde_json::Value;
use tp_core::{OutputKind, TaskKind};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Feature rows to run inference on
    pub features: Vec<Vec<Value>>,

    /// "classification" or "regression"
    pub task: TaskKind,

    /// "labels" (default) or "probabilities"; classification only
    #[serde(default)]
    pub output_type: Option<OutputKind>,
}
