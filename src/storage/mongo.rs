//! MongoDB-backed beacon store.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::DatabaseConfig;
use crate::geo::Feature;
use crate::storage::{BeaconStore, StorageError, StorageResult};

/// Beacon store over a single typed MongoDB collection.
///
/// The underlying `Client` holds a process-wide connection pool; cloning
/// the store (or the collection handle inside it) is cheap and shares that
/// pool.
#[derive(Clone)]
pub struct MongoBeaconStore {
    collection: Collection<Feature>,
}

impl MongoBeaconStore {
    /// Connect to the configured database and verify it is reachable.
    ///
    /// Called once at startup. The ping turns a bad connection string or an
    /// unreachable server into a startup failure instead of a per-request
    /// surprise.
    pub async fn connect(config: &DatabaseConfig) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| StorageError::Unavailable(format!("Invalid connection string: {}", e)))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Document store connected"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }
}

#[async_trait]
impl BeaconStore for MongoBeaconStore {
    async fn insert(&self, feature: &Feature) -> StorageResult<()> {
        self.collection
            .insert_one(feature)
            .await
            .map_err(|e| StorageError::Insert(e.to_string()))?;
        Ok(())
    }

    async fn history(&self, device_pseudonym: &str) -> StorageResult<Vec<Feature>> {
        let cursor = self
            .collection
            .find(doc! { "properties.deviceId": device_pseudonym })
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StorageError::Query(e.to_string()))
    }
}
