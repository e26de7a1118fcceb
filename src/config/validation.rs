//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required secrets are present after the environment overlay
//! - Validate value ranges and the connection string scheme
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("server.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("database connection string is required (set GEOTRAIL_DATABASE_URL)")]
    MissingDatabaseUrl,

    #[error("database connection string must start with mongodb:// or mongodb+srv://")]
    InvalidDatabaseScheme,

    #[error("database.database must not be empty")]
    EmptyDatabaseName,

    #[error("database.collection must not be empty")]
    EmptyCollectionName,

    #[error("device hashing key is required (set GEOTRAIL_DEVICE_KEY)")]
    MissingDeviceKey,
}

/// Validate a loaded configuration, collecting every problem.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.server.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.database.url.is_empty() {
        errors.push(ValidationError::MissingDatabaseUrl);
    } else if !config.database.url.starts_with("mongodb://")
        && !config.database.url.starts_with("mongodb+srv://")
    {
        errors.push(ValidationError::InvalidDatabaseScheme);
    }
    if config.database.database.is_empty() {
        errors.push(ValidationError::EmptyDatabaseName);
    }
    if config.database.collection.is_empty() {
        errors.push(ValidationError::EmptyCollectionName);
    }

    if config.hashing.device_key.is_empty() {
        errors.push(ValidationError::MissingDeviceKey);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
