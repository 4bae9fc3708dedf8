pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::model_repository::ModelRepository;

/// Embedded migrations, run at startup and by tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
