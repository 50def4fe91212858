pub mod database;
pub mod metrics;
pub mod predictor;

pub use database::PatientDb;
pub use metrics::{get_metrics, init_metrics, record_prediction, record_predictor_call};
pub use predictor::{Prediction, PredictorClient, PredictorError};
