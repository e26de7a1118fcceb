//! Shared utilities for the beacon API integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use geotrail::config::AppConfig;
use geotrail::geo::Feature;
use geotrail::http::{AppState, HttpServer};
use geotrail::identity::DeviceHasher;
use geotrail::storage::{BeaconStore, StorageError, StorageResult};

/// Key every test server hashes with; assertions on stored pseudonyms
/// derive from it.
pub const TEST_DEVICE_KEY: &str = "test-device-key";

/// In-memory stand-in for the document store.
pub struct InMemoryBeaconStore {
    features: Mutex<Vec<Feature>>,
    fail: bool,
}

impl InMemoryBeaconStore {
    pub fn new() -> Self {
        Self {
            features: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A store whose every operation fails, for exercising the 500 paths.
    pub fn failing() -> Self {
        Self {
            features: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Snapshot of everything inserted so far.
    pub fn stored(&self) -> Vec<Feature> {
        self.features.lock().unwrap().clone()
    }
}

#[async_trait]
impl BeaconStore for InMemoryBeaconStore {
    async fn insert(&self, feature: &Feature) -> StorageResult<()> {
        if self.fail {
            return Err(StorageError::Insert("injected write failure".to_string()));
        }
        self.features.lock().unwrap().push(feature.clone());
        Ok(())
    }

    async fn history(&self, device_pseudonym: &str) -> StorageResult<Vec<Feature>> {
        if self.fail {
            return Err(StorageError::Query("injected read failure".to_string()));
        }
        Ok(self
            .features
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.properties.device_id == device_pseudonym)
            .cloned()
            .collect())
    }
}

/// Spawn the API on an ephemeral port and return its base URL.
pub async fn spawn_app(store: Arc<dyn BeaconStore>) -> String {
    let config = AppConfig::default();
    let state = AppState {
        store,
        hasher: Arc::new(DeviceHasher::new(TEST_DEVICE_KEY)),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config, state);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}

/// Client hardened against environment proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
