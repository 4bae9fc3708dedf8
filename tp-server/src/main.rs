pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{auth::setup, setup_request::SetupRequest, setup_response::SetupResponse},
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

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tp_auth::{CredentialProxy, TokenCipher};
use tp_db::{IdentityRepository, ModelRepository};
use tp_upstream::HttpUpstreamClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up TP_* overrides from a local .env during development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = tp_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = tp_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    tp_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Token cipher over the configured secret; validate() guarantees presence
    let secret = config
        .security
        .secret_key
        .as_deref()
        .ok_or("TP_SECRET_KEY is required")?;
    let cipher = Arc::new(TokenCipher::new(secret)?);

    // Shared upstream client
    let upstream = Arc::new(HttpUpstreamClient::new(
        &config.upstream.base_url,
        Duration::from_secs(config.upstream.timeout_secs),
    )?);
    info!("Upstream client ready: {}", config.upstream.base_url);

    // Credential proxy over the repositories
    let proxy = Arc::new(CredentialProxy::new(
        IdentityRepository::new(pool.clone()),
        ModelRepository::new(pool.clone()),
        upstream.clone(),
        cipher,
    ));

    // Build application state and router
    let app_state = AppState {
        pool,
        proxy,
        upstream,
    };
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
