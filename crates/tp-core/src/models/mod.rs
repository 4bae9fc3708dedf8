pub mod identity;
pub mod model_record;
pub mod output_kind;
pub mod task_kind;
