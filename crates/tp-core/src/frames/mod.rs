pub mod csv_frame;
pub mod inference_frame;
pub mod training_frame;
