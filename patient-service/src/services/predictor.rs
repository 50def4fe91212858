//! Prediction service client.
//!
//! Forwards the submitted clinical features to the externally-owned
//! DR-TB resistance model and decodes its verdict. One call per inbound
//! request; no retry, circuit breaking, or timeout beyond the HTTP
//! client's defaults.

use crate::config::PredictorConfig;
use crate::models::ClinicalFeatures;
use crate::services::metrics::record_predictor_call;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verdict returned by the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    /// Numeric class label (1 = resistant).
    pub prediction: i32,
    /// Human-readable result label.
    pub result: String,
}

/// Error body the prediction service returns on failure.
#[derive(Debug, Deserialize)]
struct PredictorErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("failed to reach prediction service: {0}")]
    Connection(String),

    #[error("prediction service returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("invalid prediction response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct PredictorClient {
    client: Client,
    config: PredictorConfig,
}

impl PredictorClient {
    pub fn new(config: PredictorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.url
    }

    /// POST the features to the model endpoint and decode
    /// `{ prediction, result }`.
    pub async fn predict(
        &self,
        features: &ClinicalFeatures,
    ) -> Result<Prediction, PredictorError> {
        let response = self
            .client
            .post(&self.config.url)
            .json(features)
            .send()
            .await
            .map_err(|e| {
                record_predictor_call("connection_error");
                PredictorError::Connection(format!(
                    "failed to reach prediction service at {}: {}",
                    self.config.url, e
                ))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            record_predictor_call("connection_error");
            PredictorError::Connection(format!("failed to read prediction response: {}", e))
        })?;

        tracing::debug!(status = %status, body = %body, "Prediction service response");

        if status.is_success() {
            let prediction: Prediction = serde_json::from_str(&body).map_err(|e| {
                record_predictor_call("decode_error");
                PredictorError::InvalidResponse(format!("{}: {}", e, body))
            })?;
            record_predictor_call("success");
            tracing::info!(
                prediction = prediction.prediction,
                result = %prediction.result,
                "Prediction received"
            );
            Ok(prediction)
        } else {
            record_predictor_call("upstream_error");
            let detail = serde_json::from_str::<PredictorErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| body.clone());
            tracing::error!(
                status = %status,
                detail = %detail,
                "Prediction service call failed"
            );
            Err(PredictorError::Upstream {
                status: status.as_u16(),
                detail,
            })
        }
    }
}
