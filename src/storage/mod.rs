//! Beacon persistence subsystem.
//!
//! # Data Flow
//! ```text
//! Submit:   Feature → BeaconStore::insert → document collection
//! History:  device pseudonym → BeaconStore::history → Vec<Feature>
//! ```
//!
//! # Design Decisions
//! - `BeaconStore` is a trait so handlers stay storage-agnostic;
//!   implementations can be MongoDB or in-memory (tests)
//! - Append-only: the trait has no update or delete, matching the
//!   immutable-document contract
//! - One client/pool per process, created at startup; handlers never
//!   open connections

pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::geo::Feature;

pub use mongo::MongoBeaconStore;

/// Errors surfaced by beacon storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The connection string was rejected or the server is unreachable.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// A document write failed.
    #[error("Insert failed: {0}")]
    Insert(String),

    /// A history query failed.
    #[error("Query failed: {0}")]
    Query(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence operations for beacon Features.
///
/// Documents are written once and only ever read back; there is no
/// mutation surface by contract.
#[async_trait]
pub trait BeaconStore: Send + Sync {
    /// Persist one Feature document.
    async fn insert(&self, feature: &Feature) -> StorageResult<()>;

    /// All Features whose `properties.deviceId` equals the given
    /// pseudonym, in the store's natural order.
    async fn history(&self, device_pseudonym: &str) -> StorageResult<Vec<Feature>>;
}
