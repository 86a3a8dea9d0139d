use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    /// Origin allowed to call the API cross-origin. Same-origin only when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }
}
