use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Whether the process runs with production strictness (`ENVIRONMENT=prod`).
pub fn is_prod() -> bool {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod"
}

/// Read an environment variable, falling back to `default` outside prod.
/// In prod every setting must be explicit.
pub fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_prefers_the_set_variable() {
        env::set_var("CORE_CONFIG_TEST_SET", "from-env");
        let val = get_env("CORE_CONFIG_TEST_SET", Some("fallback"), false).unwrap();
        assert_eq!(val, "from-env");
        env::remove_var("CORE_CONFIG_TEST_SET");
    }

    #[test]
    fn get_env_falls_back_to_default_in_dev() {
        let val = get_env("CORE_CONFIG_TEST_UNSET", Some("fallback"), false).unwrap();
        assert_eq!(val, "fallback");
    }

    #[test]
    fn get_env_rejects_missing_required_in_prod() {
        let err = get_env("CORE_CONFIG_TEST_UNSET", Some("fallback"), true);
        assert!(err.is_err());
    }
}
