use async_trait::async_trait;

use crate::error::Result;

use serde_json::Value;
use tp_core::{InferenceFrame, OutputKind, TaskKind, TrainingFrame};

/// Outcome of verifying a raw upstream token.
///
/// A usage-limited token still belongs to a real account, so verification
/// distinguishes it from a valid one instead of folding both into a bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    UsageLimited,
}

/// Boundary to the hosted tabular prediction service.
///
/// Every call takes the caller's decrypted token explicitly. Implementations
/// hold no credential state of their own, which keeps one shared client
/// usable across all identities.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Checks that `token` belongs to a live upstream account.
    ///
    /// Returns `Err(UpstreamError::Auth)` when the service rejects the
    /// token and `Err(UpstreamError::Unavailable)` when the answer cannot
    /// be trusted either way.
    async fn verify_token(&self, token: &str) -> Result<TokenStatus>;

    /// Trains a model on `frame` and returns the upstream handle that
    /// identifies the trained artifact.
    async fn fit(
        &self,
        token: &str,
        frame: &TrainingFrame,
        train_config: Option<&Value>,
    ) -> Result<String>;

    /// Runs inference against a previously trained model.
    async fn predict(
        &self,
        token: &str,
        handle: &str,
        frame: &InferenceFrame,
        task: TaskKind,
        output: OutputKind,
    ) -> Result<Value>;
}
