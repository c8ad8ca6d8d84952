//! Geographic positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a latitude/longitude pair is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid position ({lat}, {lng}): {reason}")]
pub struct InvalidPosition {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A WGS84 coordinate.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]; both are
/// finite. Use [`Position::new`] to construct a checked value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    /// Create a position, validating the coordinate ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidPosition> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidPosition {
                lat,
                lng,
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPosition {
                lat,
                lng,
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidPosition {
                lat,
                lng,
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Position { lat, lng })
    }

    /// Re-check a position that arrived through deserialization.
    pub fn validated(self) -> Result<Self, InvalidPosition> {
        Position::new(self.lat, self.lng)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_vadodara() {
        let p = Position::new(22.310107655753864, 73.18211593528066).unwrap();
        assert_eq!(p.lat, 22.310107655753864);
        assert_eq!(p.lng, 73.18211593528066);
    }

    #[test]
    fn accepts_extremes() {
        assert!(Position::new(90.0, 180.0).is_ok());
        assert!(Position::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Position::new(90.1, 0.0).is_err());
        assert!(Position::new(0.0, -180.5).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Position::new(f64::NAN, 0.0).is_err());
        assert!(Position::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn validated_rechecks_deserialized() {
        let p: Position = serde_json::from_str(r#"{"lat": 123.0, "lng": 10.0}"#).unwrap();
        let err = p.validated().unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn display() {
        let p = Position::new(22.3, 73.18).unwrap();
        assert_eq!(p.to_string(), "(22.30000, 73.18000)");
    }
}
