//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the optional
//! TOML file. Secrets are not part of the file schema; they are applied
//! from the environment by the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the beacon service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings (bind address, limits).
    pub server: ServerConfig,

    /// Document store settings.
    pub database: DatabaseConfig,

    /// Device identifier hashing settings.
    pub hashing: HashingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 1000,
        }
    }
}

/// Document store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string. Environment-backed
    /// (`GEOTRAIL_DATABASE_URL`); required at startup.
    pub url: String,

    /// Database name.
    pub database: String,

    /// Collection holding the Feature documents.
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            database: "geotrail".to_string(),
            collection: "features".to_string(),
        }
    }
}

/// Device identifier hashing configuration.
#[derive(Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HashingConfig {
    /// Secret key for the device identifier HMAC. Environment-only
    /// (`GEOTRAIL_DEVICE_KEY`); never read from or written to the file.
    #[serde(skip)]
    pub device_key: String,
}

// The key must never appear in logs.
impl std::fmt::Debug for HashingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashingConfig")
            .field("device_key", &"<redacted>")
            .finish()
    }
}
