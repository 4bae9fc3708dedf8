use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FitUploadQuery {
    /// Name of the CSV column to use as the target variable (required)
    pub target_column: String,
}
