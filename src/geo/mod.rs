//! GeoJSON data model for location beacons.
//!
//! # Data Flow
//! ```text
//! Beacon submission:
//!     ValidBeacon + device pseudonym
//!         → Feature (stored shape, includes properties.deviceId)
//!         → document collection
//!
//! History retrieval:
//!     document collection
//!         → Vec<Feature>
//!         → FeatureCollection of PublicFeature (deviceId and _id dropped)
//!         → client
//! ```
//!
//! # Design Decisions
//! - `coordinates` is `[f64; 2]`, so the two-element invariant holds by type
//! - Field hiding is a dedicated view type (`PublicFeature`), not a
//!   serializer rule
//! - Coordinate order is GeoJSON's `[longitude, latitude]`

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A GeoJSON Point geometry.
///
/// Serializes as `{"type": "Point", "coordinates": [longitude, latitude]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    /// `[longitude, latitude]`, always exactly two elements.
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    /// Build a point from a latitude/longitude pair.
    ///
    /// Takes the arguments in the order the beacon API receives them and
    /// stores them in GeoJSON order.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Properties of a stored Feature document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    /// Hex HMAC pseudonym of the device identifier. Never the raw id, and
    /// never exposed to clients.
    pub device_id: String,

    /// User-supplied caption for the check-in.
    pub caption: String,

    /// Server time at creation.
    pub taken_at: DateTime<Utc>,
}

/// A location beacon as persisted in the document collection.
///
/// Documents are immutable once created; nothing in the service updates or
/// deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    /// Storage-assigned id; absent until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub properties: FeatureProperties,

    pub geometry: PointGeometry,
}

impl Feature {
    /// Construct a new Feature for a beacon, timestamped with the current
    /// server time.
    pub fn new(device_pseudonym: String, caption: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            properties: FeatureProperties {
                device_id: device_pseudonym,
                caption,
                taken_at: Utc::now(),
            },
            geometry: PointGeometry::new(latitude, longitude),
        }
    }
}

/// Client-facing properties: the stored properties minus the pseudonym.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProperties {
    pub caption: String,
    pub taken_at: DateTime<Utc>,
}

/// Client-facing view of a Feature.
///
/// Identical to the stored shape except that `properties.deviceId` and
/// `_id` are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct PublicFeature {
    pub properties: PublicProperties,
    pub geometry: PointGeometry,
}

impl From<Feature> for PublicFeature {
    fn from(feature: Feature) -> Self {
        Self {
            properties: PublicProperties {
                caption: feature.properties.caption,
                taken_at: feature.properties.taken_at,
            },
            geometry: feature.geometry,
        }
    }
}

/// A GeoJSON FeatureCollection of public features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<PublicFeature>,
}

impl FeatureCollection {
    /// Wrap stored features into the client-facing collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features: features.into_iter().map(PublicFeature::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_coordinate_order() {
        let point = PointGeometry::new(32.7157, -117.1611);
        assert_eq!(point.coordinates, [-117.1611, 32.7157]);
        assert_eq!(point.latitude(), 32.7157);
        assert_eq!(point.longitude(), -117.1611);
    }

    #[test]
    fn test_feature_serializes_as_geojson() {
        let feature = Feature::new("abcd1234".to_string(), "Home".to_string(), 32.7157, -117.1611);
        let value = serde_json::to_value(&feature).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["geometry"]["coordinates"][0], -117.1611);
        assert_eq!(value["geometry"]["coordinates"][1], 32.7157);
        assert_eq!(value["properties"]["deviceId"], "abcd1234");
        assert_eq!(value["properties"]["caption"], "Home");
        assert!(value["properties"]["takenAt"].is_string());
        // No _id until the store assigns one
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_stored_feature_round_trip() {
        let feature = Feature::new("hash".to_string(), "Pier".to_string(), -45.0, 170.5);
        let json = serde_json::to_string(&feature).unwrap();
        let back: Feature = serde_json::from_str(&json).unwrap();

        assert_eq!(back.properties.device_id, "hash");
        assert_eq!(back.properties.caption, "Pier");
        assert_eq!(back.properties.taken_at, feature.properties.taken_at);
        assert_eq!(back.geometry, feature.geometry);
    }

    #[test]
    fn test_public_view_hides_device_id() {
        let feature = Feature::new("secret-hash".to_string(), "Home".to_string(), 1.0, 2.0);
        let value = serde_json::to_value(PublicFeature::from(feature)).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["properties"]["caption"], "Home");
        assert!(value["properties"].get("deviceId").is_none());
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_empty_collection_shape() {
        let collection = FeatureCollection::new(Vec::new());
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, r#"{"type":"FeatureCollection","features":[]}"#);
    }

    #[test]
    fn test_collection_wraps_features() {
        let features = vec![
            Feature::new("h1".to_string(), "a".to_string(), 0.0, 0.0),
            Feature::new("h1".to_string(), "b".to_string(), 10.0, 20.0),
        ];
        let collection = FeatureCollection::new(features);
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[1].geometry.coordinates, [20.0, 10.0]);
    }
}
