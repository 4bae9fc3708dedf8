pub mod identity_repository;
pub mod model_repository;
