//! Model REST API handlers
//!
//! Training and prediction, with JSON bodies or multipart CSV uploads.
//! Every handler resolves the caller first and talks upstream with the
//! caller's own decrypted token.

use crate::app_state::AppState;
use crate::{
    ApiError, ApiResult, CallerIdentity, FitRequest, FitResponse, FitUploadQuery, ModelDto,
    ModelListResponse, PredictRequest, PredictResponse, PredictUploadQuery,
};

use tp_auth::ResolvedIdentity;
use tp_core::{
    InferenceFrame, OutputKind, TaskKind, TrainingFrame, parse_inference_csv, parse_training_csv,
};
use tp_db::ModelRepository;

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use log::info;
use serde_json::Value;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/models/fit
///
/// Train a new model from a JSON payload
pub async fn fit(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(request): Json<FitRequest>,
) -> ApiResult<(StatusCode, Json<FitResponse>)> {
    let frame = TrainingFrame::new(request.features, request.target, request.feature_names)?;

    train_model(&state, caller.0, frame, request.config).await
}

/// POST /api/v1/models/fit/upload?target_column=NAME
///
/// Train a new model from an uploaded CSV file
pub async fn fit_upload(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Query(query): Query<FitUploadQuery>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<FitResponse>)> {
    let data = read_file_field(multipart).await?;
    let frame = parse_training_csv(&data, &query.target_column)?;

    train_model(&state, caller.0, frame, None).await
}

/// POST /api/v1/models/{model_id}/predict
///
/// Run inference on an owned model from a JSON payload
pub async fn predict(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(model_id): Path<String>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let frame = InferenceFrame::new(request.features)?;

    run_prediction(
        &state,
        caller.0,
        &model_id,
        frame,
        request.task,
        request.output_type,
    )
    .await
}

/// POST /api/v1/models/{model_id}/predict/upload?task=...
///
/// Run inference on an owned model from an uploaded CSV file
pub async fn predict_upload(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(model_id): Path<String>,
    Query(query): Query<PredictUploadQuery>,
    multipart: Multipart,
) -> ApiResult<Json<PredictResponse>> {
    let data = read_file_field(multipart).await?;
    let (_headers, frame) = parse_inference_csv(&data)?;

    run_prediction(
        &state,
        caller.0,
        &model_id,
        frame,
        query.task,
        query.output_type,
    )
    .await
}

/// GET /api/v1/models
///
/// List the caller's models with metadata
pub async fn list_models(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> ApiResult<Json<ModelListResponse>> {
    let repo = ModelRepository::new(state.pool.clone());
    let records = repo.find_by_owner(caller.0.id).await?;

    Ok(Json(ModelListResponse {
        models: records.into_iter().map(ModelDto::from).collect(),
    }))
}

// =============================================================================
// Shared paths
// =============================================================================

async fn train_model(
    state: &AppState,
    caller: ResolvedIdentity,
    frame: TrainingFrame,
    config: Option<Value>,
) -> ApiResult<(StatusCode, Json<FitResponse>)> {
    let handle = state
        .upstream
        .fit(&caller.upstream_token, &frame, config.as_ref())
        .await?;

    let record = tp_core::ModelRecord::new(
        handle,
        caller.id,
        frame.feature_count(),
        frame.sample_count(),
        frame.feature_names.clone(),
        config,
    );

    let repo = ModelRepository::new(state.pool.clone());
    repo.create(&record).await?;

    info!(
        "Trained model {} for identity {} ({} rows x {} columns)",
        record.id,
        caller.id,
        record.sample_count,
        record.feature_count
    );

    Ok((
        StatusCode::CREATED,
        Json(FitResponse {
            model_id: record.id,
        }),
    ))
}

async fn run_prediction(
    state: &AppState,
    caller: ResolvedIdentity,
    model_id: &str,
    frame: InferenceFrame,
    task: TaskKind,
    output_type: Option<OutputKind>,
) -> ApiResult<Json<PredictResponse>> {
    let model_id = Uuid::parse_str(model_id)?;

    if task == TaskKind::Regression && output_type == Some(OutputKind::Probabilities) {
        return Err(ApiError::validation(
            "Probability output is only available for classification tasks",
        ));
    }
    let output = output_type.unwrap_or_default();

    let record = state.proxy.authorize_model(caller.id, model_id).await?;
    frame.check_columns(record.feature_count)?;

    let predictions = state
        .upstream
        .predict(
            &caller.upstream_token,
            &record.upstream_handle,
            &frame,
            task,
            output,
        )
        .await?;

    Ok(Json(PredictResponse { predictions }))
}

/// Pulls the bytes of the `file` part out of a multipart upload.
async fn read_file_field(mut multipart: Multipart) -> ApiResult<Vec<u8>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            return Ok(field.bytes().await?.to_vec());
        }
    }

    Err(ApiError::validation(
        "Multipart upload must include a 'file' part",
    ))
}
