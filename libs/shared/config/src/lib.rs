use std::env;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub schedule_secret_key: String,
    pub schedule_message: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// The base URL may be defaulted for local development, but the
    /// schedule signing credentials must be present: a missing value is a
    /// hard error, never a fallback secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            api_base_url: env::var("API_BASE_URL").unwrap_or_else(|_| {
                warn!("API_BASE_URL not set, using http://localhost:8080");
                "http://localhost:8080".to_string()
            }),
            schedule_secret_key: env::var("PS_KEY")
                .map_err(|_| ConfigError::MissingVar("PS_KEY"))?,
            schedule_message: env::var("PS_TOKEN")
                .map_err(|_| ConfigError::MissingVar("PS_TOKEN"))?,
        };

        if !config.is_configured() {
            warn!("Application not fully configured - empty signing credentials");
        }

        Ok(config)
    }

    pub fn is_configured(&self) -> bool {
        !self.schedule_secret_key.is_empty() && !self.schedule_message.is_empty()
    }
}
