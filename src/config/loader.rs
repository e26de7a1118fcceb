//! Configuration loading: optional TOML file plus environment overlay.
//!
//! The file is optional (all fields have defaults); the two secrets are
//! environment-only and required, so a deployment can run with nothing but
//! `GEOTRAIL_DATABASE_URL` and `GEOTRAIL_DEVICE_KEY` set.

use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the path of the optional TOML file.
pub const CONFIG_PATH_ENV_VAR: &str = "GEOTRAIL_CONFIG";

/// Environment variable holding the MongoDB connection string.
pub const DATABASE_URL_ENV_VAR: &str = "GEOTRAIL_DATABASE_URL";

/// Environment variable holding the device hashing secret.
pub const DEVICE_KEY_ENV_VAR: &str = "GEOTRAIL_DEVICE_KEY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<ValidationError>),
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, overlay, and validate the configuration.
///
/// Order: defaults → TOML file (if `GEOTRAIL_CONFIG` is set) → environment
/// secrets. Validation failures abort startup with every problem listed.
pub fn load() -> Result<AppConfig, ConfigError> {
    let mut config = match std::env::var(CONFIG_PATH_ENV_VAR) {
        Ok(path) => load_file(Path::new(&path))?,
        Err(_) => AppConfig::default(),
    };

    if let Ok(url) = std::env::var(DATABASE_URL_ENV_VAR) {
        config.database.url = url;
    }
    if let Ok(key) = std::env::var(DEVICE_KEY_ENV_VAR) {
        config.hashing.device_key = key;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML file into an (unvalidated) configuration.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
