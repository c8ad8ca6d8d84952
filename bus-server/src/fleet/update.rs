//! Telemetry reports and how they merge into stored snapshots.

use chrono::{DateTime, Utc};

use crate::domain::{BusId, BusTelemetrySnapshot, CrowdLevel, DomainError, Position, validate_speed};
use crate::engine::classify;

/// A driver's location report.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationUpdate {
    pub bus_id: BusId,
    pub position: Position,
    /// Absent keeps the previously stored speed.
    pub speed_kmh: Option<f64>,
    /// Absent keeps the previously stored route.
    pub route_id: Option<String>,
}

impl LocationUpdate {
    /// Create a report, rejecting a negative or non-finite speed.
    pub fn new(
        bus_id: BusId,
        position: Position,
        speed_kmh: Option<f64>,
    ) -> Result<Self, DomainError> {
        let speed_kmh = speed_kmh.map(validate_speed).transpose()?;
        Ok(Self {
            bus_id,
            position,
            speed_kmh,
            route_id: None,
        })
    }

    /// Attach the route the bus is running.
    pub fn with_route(mut self, route_id: impl Into<String>) -> Self {
        self.route_id = Some(route_id.into());
        self
    }

    /// Merge into the existing snapshot, or create one.
    pub fn apply(
        self,
        existing: Option<BusTelemetrySnapshot>,
        now: DateTime<Utc>,
    ) -> BusTelemetrySnapshot {
        let mut snapshot =
            existing.unwrap_or_else(|| BusTelemetrySnapshot::new(self.bus_id.clone(), now));

        snapshot.position = Some(self.position);
        if let Some(speed) = self.speed_kmh {
            snapshot.speed_kmh = Some(speed);
        }
        if let Some(route) = self.route_id {
            snapshot.route_id = Some(route);
        }
        snapshot.last_updated = now;
        snapshot
    }
}

/// A conductor's crowd report.
#[derive(Debug, Clone, PartialEq)]
pub struct CrowdUpdate {
    pub bus_id: BusId,
    /// Raw label as reported; see [`classify`] for how it resolves.
    pub crowd_level: Option<String>,
    pub passenger_count: Option<u32>,
    pub male_count: Option<u32>,
    pub female_count: Option<u32>,
}

impl CrowdUpdate {
    /// An empty report for `bus_id`; it only refreshes the timestamp.
    pub fn new(bus_id: BusId) -> Self {
        Self {
            bus_id,
            crowd_level: None,
            passenger_count: None,
            male_count: None,
            female_count: None,
        }
    }

    /// The level this report resolves to, or `None` to keep the stored one.
    pub fn resolved_level(&self) -> Option<CrowdLevel> {
        classify(self.passenger_count, self.crowd_level.as_deref())
    }

    /// Merge into the existing snapshot, or create one.
    pub fn apply(
        self,
        existing: Option<BusTelemetrySnapshot>,
        now: DateTime<Utc>,
    ) -> BusTelemetrySnapshot {
        let level = self.resolved_level();
        let mut snapshot =
            existing.unwrap_or_else(|| BusTelemetrySnapshot::new(self.bus_id.clone(), now));

        if let Some(level) = level {
            snapshot.crowd_level = level;
        }
        if let Some(count) = self.passenger_count {
            snapshot.passenger_count = Some(count);
        }
        if let Some(count) = self.male_count {
            snapshot.male_count = Some(count);
        }
        if let Some(count) = self.female_count {
            snapshot.female_count = Some(count);
        }
        snapshot.last_updated = now;
        snapshot
    }
}
