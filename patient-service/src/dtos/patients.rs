use crate::services::Prediction;
use serde::Serialize;

/// Body of a successful prediction request: the upstream verdict,
/// returned to the caller unchanged.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: i32,
    pub result: String,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            prediction: p.prediction,
            result: p.result,
        }
    }
}
