//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file from GEOTRAIL_CONFIG)
//!     → loader.rs (environment overlay: database URL, device key)
//!     → validation.rs (semantic checks, all errors collected)
//!     → AppConfig (validated, immutable)
//!     → shared with the server, store, and hasher at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All file fields have defaults so a minimal deployment needs only the
//!   two environment secrets
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::{AppConfig, DatabaseConfig, HashingConfig, ServerConfig};
