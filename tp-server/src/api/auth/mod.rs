pub mod auth;
pub mod setup_request;
pub mod setup_response;
