//! Bus telemetry snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BusId, CrowdLevel, Position};

/// A bus's last-known state.
///
/// A snapshot is created the first time telemetry arrives for a bus and is
/// updated by every subsequent report. Snapshots are never deleted; a bus
/// that stops reporting simply ages out of the freshness window.
///
/// `position` is absent only for a bus that has so far been seen through
/// conductor crowd reports and never through a location update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusTelemetrySnapshot {
    pub bus_id: BusId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Last reported speed. Absent or zero means the engine baseline applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_kmh: Option<f64>,

    pub crowd_level: CrowdLevel,

    /// Last conductor head count. Authoritative over a supplied level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    pub last_updated: DateTime<Utc>,
}

impl BusTelemetrySnapshot {
    /// Create a snapshot for a bus with no telemetry beyond its timestamp.
    pub fn new(bus_id: BusId, last_updated: DateTime<Utc>) -> Self {
        Self {
            bus_id,
            position: None,
            speed_kmh: None,
            crowd_level: CrowdLevel::default(),
            passenger_count: None,
            male_count: None,
            female_count: None,
            route_id: None,
            last_updated,
        }
    }

    /// Set the position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the reported speed.
    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = Some(speed_kmh);
        self
    }

    /// Set the crowd level.
    pub fn with_crowd_level(mut self, level: CrowdLevel) -> Self {
        self.crowd_level = level;
        self
    }

    /// The speed to plan with: the reported speed if positive, otherwise
    /// `baseline_kmh`.
    pub fn effective_speed_kmh(&self, baseline_kmh: f64) -> f64 {
        match self.speed_kmh {
            Some(speed) if speed > 0.0 => speed,
            _ => baseline_kmh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 12, 9, 30, 0).unwrap()
    }

    #[test]
    fn new_has_defaults() {
        let snap = BusTelemetrySnapshot::new(BusId::parse("bus001").unwrap(), ts());
        assert_eq!(snap.crowd_level, CrowdLevel::Low);
        assert!(snap.position.is_none());
        assert!(snap.speed_kmh.is_none());
        assert!(snap.passenger_count.is_none());
        assert_eq!(snap.last_updated, ts());
    }

    #[test]
    fn effective_speed_falls_back_to_baseline() {
        let id = BusId::parse("bus001").unwrap();
        let snap = BusTelemetrySnapshot::new(id, ts());
        assert_eq!(snap.effective_speed_kmh(30.0), 30.0);

        let snap = snap.with_speed(0.0);
        assert_eq!(snap.effective_speed_kmh(30.0), 30.0);

        let snap = snap.with_speed(48.0);
        assert_eq!(snap.effective_speed_kmh(30.0), 48.0);
    }

    #[test]
    fn serializes_camel_case_and_skips_absent() {
        let snap = BusTelemetrySnapshot::new(BusId::parse("bus001").unwrap(), ts())
            .with_position(Position::new(22.3, 73.18).unwrap())
            .with_speed(40.0)
            .with_crowd_level(CrowdLevel::Medium);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["busId"], "bus001");
        assert_eq!(json["speedKmh"], 40.0);
        assert_eq!(json["crowdLevel"], "Medium");
        assert_eq!(json["position"]["lat"], 22.3);
        assert!(json.get("passengerCount").is_none());
        assert!(json.get("routeId").is_none());
        assert!(json["lastUpdated"].is_string());
    }
}
