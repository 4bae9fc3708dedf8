pub mod error;
pub mod frames;
pub mod models;

pub use error::{CoreError, Result};
pub use frames::csv_frame::{parse_inference_csv, parse_training_csv};
pub use frames::inference_frame::InferenceFrame;
pub use frames::training_frame::TrainingFrame;
pub use models::identity::Identity;
pub use models::model_record::ModelRecord;
pub use models::output_kind::OutputKind;
pub use models::task_kind::TaskKind;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
