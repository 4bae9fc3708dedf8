use crate::ModelDto;
use serde::Serialize;

/// List of the caller's models
#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    pub models: Vec<ModelDto>,
}
