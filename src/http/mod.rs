//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → beacons.rs (handlers: submit, history, health)
//!     → validation.rs (field checks, all failures collected)
//!     → error.rs (status mapping, {"error": ...} body)
//! ```

pub mod beacons;
pub mod error;
pub mod server;
pub mod validation;

pub use beacons::GEOJSON_CONTENT_TYPE;
pub use error::ApiError;
pub use server::{AppState, HttpServer};
