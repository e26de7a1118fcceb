//! Beacon API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::geo::{Feature, FeatureCollection};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::validation::{validate, BeaconPayload};

/// Media type for GeoJSON responses.
pub const GEOJSON_CONTENT_TYPE: &str = "application/vnd.geo+json";

/// Success body for a beacon submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub result: &'static str,
}

impl Default for SubmitResponse {
    fn default() -> Self {
        Self { result: "success" }
    }
}

/// Responder that serializes its payload as JSON under the GeoJSON media
/// type.
pub struct GeoJson<T>(pub T);

impl<T: Serialize> IntoResponse for GeoJson<T> {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, GEOJSON_CONTENT_TYPE)], Json(self.0)).into_response()
    }
}

/// Record a location beacon for a device.
///
/// `POST /devices/{device_id}/locations`
pub async fn submit_beacon(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
    payload: Result<Json<BeaconPayload>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(payload) = payload?;
    let beacon = validate(payload)?;

    let pseudonym = state.hasher.pseudonym(&device_id);
    let feature = Feature::new(pseudonym, beacon.caption, beacon.lat, beacon.long);
    state.store.insert(&feature).await?;

    tracing::debug!(
        device = %feature.properties.device_id,
        latitude = beacon.lat,
        longitude = beacon.long,
        "Beacon recorded"
    );

    Ok(Json(SubmitResponse::default()))
}

/// Retrieve the full location history for a device as a GeoJSON
/// FeatureCollection.
///
/// `GET /devices/{device_id}/history`
pub async fn device_history(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<GeoJson<FeatureCollection>, ApiError> {
    let pseudonym = state.hasher.pseudonym(&device_id);
    let features = state.store.history(&pseudonym).await?;

    tracing::debug!(
        device = %pseudonym,
        count = features.len(),
        "History retrieved"
    );

    Ok(GeoJson(FeatureCollection::new(features)))
}

/// Liveness probe. No storage round-trip.
///
/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
