//! Device identifier pseudonymization.
//!
//! # Responsibilities
//! - Map raw device identifiers to deterministic, fixed-length pseudonyms
//! - Keep the raw identifier out of storage, responses, and logs
//!
//! # Design Decisions
//! - HMAC-SHA256 keyed with a server-held secret, hex-encoded (64 chars)
//! - Deterministic: same key + same identifier always yields the same
//!   pseudonym, so history lookups need no mapping table
//! - The key is validated non-empty at configuration time; a constructed
//!   hasher always has a usable key

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Keyed hasher for device identifiers.
#[derive(Clone)]
pub struct DeviceHasher {
    key: Vec<u8>,
}

impl DeviceHasher {
    /// Create a hasher from the configured secret key.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.as_bytes().to_vec(),
        }
    }

    /// Compute the pseudonym for a raw device identifier.
    pub fn pseudonym(&self, device_id: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(device_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

// The key must never appear in logs.
impl std::fmt::Debug for DeviceHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHasher").field("key", &"<redacted>").finish()
    }
}
