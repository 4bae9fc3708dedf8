//! HTTP implementation of [`UpstreamClient`] over reqwest.

use std::time::Duration;

use crate::classify::{FailureKind, classify_failure};
use crate::client::{TokenStatus, UpstreamClient};
use crate::error::{Result, UpstreamError};

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::{Value, json};
use tp_core::{InferenceFrame, OutputKind, TaskKind, TrainingFrame};

/// Talks to the hosted prediction service over HTTPS.
///
/// One instance is shared by every request handler; the caller's token is
/// attached per call as a bearer header.
pub struct HttpUpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::unavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Extracts the most useful message from an upstream error body.
    ///
    /// The service usually answers `{"detail": "..."}`, but plain text
    /// bodies show up on gateway errors, so fall back to the raw text.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)));

        match detail {
            Some(detail) => format!("{} {}", status.as_u16(), detail),
            None if body.is_empty() => status.to_string(),
            None => format!("{} {}", status.as_u16(), body),
        }
    }

    async fn failure_from_response(response: reqwest::Response) -> (FailureKind, String) {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(status, &body);
        (classify_failure(&message), message)
    }
}

/// Transport failures carry no upstream verdict on the credential.
fn transport_error(error: reqwest::Error) -> UpstreamError {
    UpstreamError::unavailable(error.to_string())
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn verify_token(&self, token: &str) -> Result<TokenStatus> {
        let response = self
            .http
            .get(self.url("/api/v1/usage/"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            return Ok(TokenStatus::Valid);
        }

        let (kind, message) = Self::failure_from_response(response).await;
        match kind {
            FailureKind::Auth => Err(UpstreamError::auth(message)),
            // A limit hit proves the account exists, so the token verifies.
            FailureKind::UsageLimit => Ok(TokenStatus::UsageLimited),
            FailureKind::Connectivity => Err(UpstreamError::unavailable(message)),
        }
    }

    async fn fit(
        &self,
        token: &str,
        frame: &TrainingFrame,
        train_config: Option<&Value>,
    ) -> Result<String> {
        debug!(
            "Submitting fit: {} rows x {} columns",
            frame.sample_count(),
            frame.feature_count()
        );

        let mut body = json!({
            "X": frame.features,
            "y": frame.target,
        });
        if let Some(config) = train_config {
            body["tabpfn_config"] = config.clone();
        }

        let response = self
            .http
            .post(self.url("/api/v1/fit/"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let (kind, message) = Self::failure_from_response(response).await;
            warn!("Fit rejected upstream: {message}");
            return match kind {
                FailureKind::Auth => Err(UpstreamError::auth(message)),
                _ => Err(UpstreamError::unavailable(message)),
            };
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::protocol(e.to_string()))?;

        payload
            .get("train_set_uid")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| UpstreamError::protocol("fit response missing train_set_uid"))
    }

    async fn predict(
        &self,
        token: &str,
        handle: &str,
        frame: &InferenceFrame,
        task: TaskKind,
        output: OutputKind,
    ) -> Result<Value> {
        debug!(
            "Submitting predict for handle {handle}: {} rows",
            frame.features.len()
        );

        let body = json!({
            "train_set_uid": handle,
            "X": frame.features,
            "task": task.as_str(),
            "output_type": output.as_str(),
        });

        let response = self
            .http
            .post(self.url("/api/v1/predict/"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let (kind, message) = Self::failure_from_response(response).await;
            warn!("Predict rejected upstream: {message}");
            return match kind {
                FailureKind::Auth => Err(UpstreamError::auth(message)),
                _ => Err(UpstreamError::unavailable(message)),
            };
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::protocol(e.to_string()))?;

        payload
            .get("predictions")
            .cloned()
            .ok_or_else(|| UpstreamError::protocol("predict response missing predictions"))
    }
}
