use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Clinical feature codes submitted for a prediction.
///
/// Field names are the wire format the model was trained on, so they are
/// kept verbatim in JSON and in storage. Every field is optional; absent
/// fields stay absent rather than serializing as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cd4rslt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture_result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afb_microscopy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tb_history: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fever: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiv_status: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiv_cd4_low: Option<f64>,
}

/// A stored patient document: the submitted features plus the model verdict.
///
/// Records are written once and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub features: ClinicalFeatures,
    pub prediction: i32,
    pub result: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl PatientRecord {
    /// Both verdict fields are required up front; no write path exists
    /// that stores one without the other.
    pub fn new(features: ClinicalFeatures, prediction: i32, result: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            features,
            prediction,
            result,
            created_at: Utc::now(),
        }
    }
}
