use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct FitResponse {
    /// Local id of the newly trained model
    pub model_id: Uuid,
}
