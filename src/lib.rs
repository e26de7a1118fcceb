//! Device location beacon service library

pub mod config;
pub mod geo;
pub mod http;
pub mod identity;
pub mod storage;

pub use config::AppConfig;
pub use http::{AppState, HttpServer};
