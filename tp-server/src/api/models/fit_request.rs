use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    /// Feature data as a list of rows, e.g. [[1, 2.5, "A"], [3, 4.0, "B"]]
    pub features: Vec<Vec<Value>>,

    /// Target values, one per feature row
    pub target: Vec<Value>,

    /// Optional column names matching the feature columns
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,

    /// Optional configuration passed through to the upstream fit call
    #[serde(default)]
    pub config: Option<Value>,
}
