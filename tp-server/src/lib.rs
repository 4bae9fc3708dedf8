pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::setup, setup_request::SetupRequest, setup_response::SetupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_identity::CallerIdentity,
    models::{
        fit_request::FitRequest,
        fit_response::FitResponse,
        fit_upload_query::FitUploadQuery,
        model_dto::ModelDto,
        model_list_response::ModelListResponse,
        models::{fit, fit_upload, list_models, predict, predict_upload},
        predict_request::PredictRequest,
        predict_response::PredictResponse,
        predict_upload_query::PredictUploadQuery,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
