//! Domain error types.
//!
//! These errors represent validation failures on telemetry and requests
//! entering the system. They are distinct from storage and HTTP errors.

use super::{InvalidBusId, InvalidPosition};

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Bus identifier is missing or blank
    #[error(transparent)]
    BusId(#[from] InvalidBusId),

    /// Coordinates out of range
    #[error(transparent)]
    Position(#[from] InvalidPosition),

    /// Speed is negative or not a number
    #[error("invalid speed: {0} km/h (must be finite and non-negative)")]
    InvalidSpeed(f64),

    /// A passenger count is negative
    #[error("invalid {field}: {value} (must be non-negative)")]
    NegativeCount { field: &'static str, value: i64 },

    /// A required request field is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Check a reported speed, rejecting negative and non-finite values.
pub fn validate_speed(speed_kmh: f64) -> Result<f64, DomainError> {
    if !speed_kmh.is_finite() || speed_kmh < 0.0 {
        return Err(DomainError::InvalidSpeed(speed_kmh));
    }
    Ok(speed_kmh)
}

/// Check a reported head count, rejecting negative values.
pub fn validate_count(field: &'static str, value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::NegativeCount { field, value })
}
