//! Data transfer objects for web requests and responses.
//!
//! Request bodies are deserialized leniently (every field optional) and then
//! converted into validated domain requests, so a missing field produces a
//! clear 400 rather than a generic parse failure.

use serde::{Deserialize, Serialize};

use crate::domain::{BusId, BusTelemetrySnapshot, DomainError, Position, validate_count};
use crate::engine::{SuggestionCandidate, SuggestionRequest};
use crate::fleet::{CrowdUpdate, LocationUpdate};

/// Driver location report.
#[derive(Debug, Deserialize)]
pub struct LocationUpdateRequest {
    /// Bus identifier
    #[serde(alias = "busId")]
    pub bus_id: Option<String>,

    pub lat: Option<f64>,

    pub lng: Option<f64>,

    /// Speed in km/h
    pub speed: Option<f64>,

    /// Route the bus is running, e.g. "1A"
    #[serde(alias = "routeId")]
    pub route_id: Option<String>,
}

impl LocationUpdateRequest {
    /// Validate into a location update.
    pub fn into_update(self) -> Result<LocationUpdate, DomainError> {
        let bus_id = self.bus_id.ok_or(DomainError::MissingField("bus_id"))?;
        let lat = self.lat.ok_or(DomainError::MissingField("lat"))?;
        let lng = self.lng.ok_or(DomainError::MissingField("lng"))?;

        let mut update = LocationUpdate::new(
            BusId::parse(&bus_id)?,
            Position::new(lat, lng)?,
            self.speed,
        )?;
        update.route_id = self.route_id.filter(|r| !r.is_empty());
        Ok(update)
    }
}

/// Response to a location report.
#[derive(Debug, Serialize)]
pub struct LocationUpdateResponse {
    pub success: bool,
    pub message: String,
    pub bus: BusTelemetrySnapshot,
}

/// Conductor crowd report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdUpdateRequest {
    pub bus_id: Option<String>,

    /// Raw crowd label; unrecognised values are stored as "Low"
    pub crowd_level: Option<String>,

    pub passenger_count: Option<i64>,

    pub male_count: Option<i64>,

    pub female_count: Option<i64>,
}

impl CrowdUpdateRequest {
    /// Validate into a crowd update.
    pub fn into_update(self) -> Result<CrowdUpdate, DomainError> {
        let bus_id = self.bus_id.ok_or(DomainError::MissingField("busId"))?;
        let count = |field, value: Option<i64>| value.map(|v| validate_count(field, v)).transpose();

        Ok(CrowdUpdate {
            crowd_level: self.crowd_level,
            passenger_count: count("passengerCount", self.passenger_count)?,
            male_count: count("maleCount", self.male_count)?,
            female_count: count("femaleCount", self.female_count)?,
            ..CrowdUpdate::new(BusId::parse(&bus_id)?)
        })
    }
}

/// Response to a crowd report.
#[derive(Debug, Serialize)]
pub struct CrowdUpdateResponse {
    pub success: bool,
    pub message: String,
    pub bus: BusTelemetrySnapshot,
}

impl CrowdUpdateResponse {
    /// Build the response for a stored snapshot.
    ///
    /// `reported_count` is the head count carried by this report, if any;
    /// a count stored by an earlier report is not echoed.
    pub fn from_snapshot(bus: BusTelemetrySnapshot, reported_count: Option<u32>) -> Self {
        let message = match reported_count {
            Some(count) => format!("Count updated to {}. Level: {}", count, bus.crowd_level),
            None => format!("Level: {}", bus.crowd_level),
        };
        Self {
            success: true,
            message,
            bus,
        }
    }
}

/// Request for ranked bus suggestions.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub origin: Option<Position>,
    pub dest: Option<Position>,
}

impl SuggestRequest {
    /// Validate into an engine request.
    pub fn into_request(self) -> Result<SuggestionRequest, DomainError> {
        let origin = self.origin.ok_or(DomainError::MissingField("origin"))?;
        let dest = self.dest.ok_or(DomainError::MissingField("dest"))?;
        Ok(SuggestionRequest::new(origin.validated()?, dest.validated()?))
    }
}

/// Ranked suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub routes: Vec<SuggestionCandidate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuggestResponse {
    /// Wrap ranked candidates, adding the no-buses message when empty.
    pub fn from_routes(routes: Vec<SuggestionCandidate>) -> Self {
        let message = routes
            .is_empty()
            .then(|| "No active buses found".to_string());
        Self {
            success: true,
            routes,
            message,
        }
    }
}

/// Currently active buses.
#[derive(Debug, Serialize)]
pub struct BusesResponse {
    pub success: bool,
    pub buses: Vec<BusTelemetrySnapshot>,
}

/// A single bus.
#[derive(Debug, Serialize)]
pub struct BusResponse {
    pub success: bool,
    pub bus: BusTelemetrySnapshot,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
