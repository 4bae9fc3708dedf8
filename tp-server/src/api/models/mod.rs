pub mod fit_request;
pub mod fit_response;
pub mod fit_upload_query;
pub mod model_dto;
pub mod model_list_response;
pub mod models;
pub mod predict_request;
pub mod predict_response;
pub mod predict_upload_query;
