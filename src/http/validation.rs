//! Beacon submission validation.
//!
//! # Responsibilities
//! - Check required fields and coordinate ranges
//! - Collect every failure, not just the first
//!
//! # Design Decisions
//! - Validation is pure function: BeaconPayload → Result<ValidBeacon, Vec<ValidationError>>
//! - Handlers turn the Err side into a single 400 response, so a request
//!   can never be answered twice
//! - Payload fields are Options: absence is a validation failure, not a
//!   deserialization failure

use serde::Deserialize;
use thiserror::Error;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Raw submission body, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct BeaconPayload {
    pub caption: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBeacon {
    pub caption: String,
    pub lat: f64,
    pub long: f64,
}

/// A single problem with a submitted beacon.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("caption is required")]
    MissingCaption,

    #[error("lat is required")]
    MissingLat,

    #[error("lat must be between -90 and 90 (got {0})")]
    LatOutOfRange(f64),

    #[error("long is required")]
    MissingLong,

    #[error("long must be between -180 and 180 (got {0})")]
    LongOutOfRange(f64),
}

/// Validate a submission, checking each field independently.
pub fn validate(payload: BeaconPayload) -> Result<ValidBeacon, Vec<ValidationError>> {
    let mut errors = Vec::new();

    // An empty caption is as useless as a missing one; both read as absent.
    let caption = match payload.caption {
        Some(caption) if !caption.is_empty() => Some(caption),
        _ => {
            errors.push(ValidationError::MissingCaption);
            None
        }
    };

    let lat = match payload.lat {
        Some(lat) if (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) => Some(lat),
        Some(lat) => {
            errors.push(ValidationError::LatOutOfRange(lat));
            None
        }
        None => {
            errors.push(ValidationError::MissingLat);
            None
        }
    };

    let long = match payload.long {
        Some(long) if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&long) => Some(long),
        Some(long) => {
            errors.push(ValidationError::LongOutOfRange(long));
            None
        }
        None => {
            errors.push(ValidationError::MissingLong);
            None
        }
    };

    match (caption, lat, long) {
        (Some(caption), Some(lat), Some(long)) => Ok(ValidBeacon { caption, lat, long }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(caption: &str, lat: f64, long: f64) -> BeaconPayload {
        BeaconPayload {
            caption: Some(caption.to_string()),
            lat: Some(lat),
            long: Some(long),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let beacon = validate(payload("Home", 32.7157, -117.1611)).unwrap();
        assert_eq!(beacon.caption, "Home");
        assert_eq!(beacon.lat, 32.7157);
        assert_eq!(beacon.long, -117.1611);
    }

    #[test]
    fn test_boundary_coordinates_pass() {
        assert!(validate(payload("n", 90.0, 180.0)).is_ok());
        assert!(validate(payload("s", -90.0, -180.0)).is_ok());
    }

    #[test]
    fn test_empty_body_collects_every_failure() {
        let errors = validate(BeaconPayload::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingCaption,
                ValidationError::MissingLat,
                ValidationError::MissingLong,
            ]
        );
    }

    #[test]
    fn test_latitude_out_of_range() {
        let errors = validate(payload("Home", 91.0, 0.0)).unwrap_err();
        assert_eq!(errors, vec![ValidationError::LatOutOfRange(91.0)]);
        assert!(errors[0].to_string().contains("between -90 and 90"));
    }

    #[test]
    fn test_longitude_out_of_range() {
        let errors = validate(payload("Home", 0.0, -180.5)).unwrap_err();
        assert_eq!(errors, vec![ValidationError::LongOutOfRange(-180.5)]);
    }

    #[test]
    fn test_range_checks_do_not_short_circuit() {
        let errors = validate(payload("Home", 91.0, 181.0)).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::LatOutOfRange(91.0),
                ValidationError::LongOutOfRange(181.0),
            ]
        );
    }

    #[test]
    fn test_empty_caption_reads_as_missing() {
        let errors = validate(BeaconPayload {
            caption: Some(String::new()),
            lat: Some(0.0),
            long: Some(0.0),
        })
        .unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingCaption]);
    }

    #[test]
    fn test_zero_coordinates_are_present() {
        // (0, 0) is a real position, not an absent field
        assert!(validate(payload("Null Island", 0.0, 0.0)).is_ok());
    }
}
