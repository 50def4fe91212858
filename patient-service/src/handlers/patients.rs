//! Patient prediction handler.
//!
//! The prediction call and the database write are awaited in sequence
//! within the request's task; a record is written only after the
//! upstream call succeeds.

use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::PredictResponse;
use crate::models::{ClinicalFeatures, PatientRecord};
use crate::services::record_prediction;
use crate::startup::AppState;

/// Forward the submitted features to the prediction service, persist the
/// combined record, and reply with the model's verdict.
pub async fn create_patient(
    State(state): State<AppState>,
    Json(payload): Json<ClinicalFeatures>,
) -> Result<Json<PredictResponse>, AppError> {
    tracing::info!(endpoint = %state.predictor.endpoint(), "Requesting prediction");

    let prediction = match state.predictor.predict(&payload).await {
        Ok(p) => p,
        Err(e) => {
            record_prediction("upstream_error");
            return Err(AppError::PredictionFailed(anyhow::Error::new(e)));
        }
    };

    let record = PatientRecord::new(payload, prediction.prediction, prediction.result.clone());

    tracing::info!(
        patient_id = %record.id,
        prediction = record.prediction,
        result = %record.result,
        "Storing patient record"
    );

    if let Err(e) = state.db.create_patient(&record).await {
        record_prediction("write_error");
        return Err(e);
    }
    record_prediction("stored");

    Ok(Json(PredictResponse::from(prediction)))
}
