use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::{get_env, is_prod};
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct PatientConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub predictor: PredictorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Full URL of the prediction endpoint, body-compatible with the
    /// clinical feature payload.
    pub url: String,
}

impl PatientConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;
        let is_prod = is_prod();

        Ok(PatientConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", None, is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("drtb_db"), is_prod)?,
            },
            predictor: PredictorConfig {
                url: get_env(
                    "PREDICTOR_URL",
                    Some("http://127.0.0.1:5000/predict"),
                    is_prod,
                )?,
            },
        })
    }
}
