use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// One entry per input row; labels or per-class probabilities
    /// depending on the requested output type.
    pub predictions: Value,
}
