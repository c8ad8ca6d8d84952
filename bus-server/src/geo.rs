//! Trip distance and ETA sources.
//!
//! The engine never computes distances or arrival times itself. It asks a
//! [`TripDistance`] for the length of the passenger's trip and an
//! [`EtaSource`] for how long each bus needs to reach the passenger, so both
//! can be swapped for a routing service or pinned in tests.

use crate::domain::{BusTelemetrySnapshot, Position};

/// Mean Earth radius (km).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two positions in kilometres.
pub fn haversine_km(a: Position, b: Position) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Provides the length of a passenger's trip.
pub trait TripDistance: Send + Sync {
    /// Distance from `origin` to `dest` in kilometres.
    fn distance_km(&self, origin: Position, dest: Position) -> f64;
}

/// Straight-line (great-circle) trip distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl TripDistance for Haversine {
    fn distance_km(&self, origin: Position, dest: Position) -> f64 {
        haversine_km(origin, dest)
    }
}

/// The same distance for every trip.
#[derive(Debug, Clone, Copy)]
pub struct FixedDistance(pub f64);

impl TripDistance for FixedDistance {
    fn distance_km(&self, _origin: Position, _dest: Position) -> f64 {
        self.0
    }
}

/// Provides how many minutes a bus needs to reach a passenger.
pub trait EtaSource: Send + Sync {
    fn eta_minutes(&self, snapshot: &BusTelemetrySnapshot, origin: Position) -> u32;
}

/// Estimates arrival from the bus's last position and speed.
///
/// Buses with no known position get `fallback_mins`.
#[derive(Debug, Clone, Copy)]
pub struct ApproachEta {
    pub baseline_speed_kmh: f64,
    pub fallback_mins: u32,
}

impl ApproachEta {
    pub fn new(baseline_speed_kmh: f64, fallback_mins: u32) -> Self {
        Self {
            baseline_speed_kmh,
            fallback_mins,
        }
    }
}

impl EtaSource for ApproachEta {
    fn eta_minutes(&self, snapshot: &BusTelemetrySnapshot, origin: Position) -> u32 {
        let Some(position) = snapshot.position else {
            return self.fallback_mins;
        };
        let speed = snapshot.effective_speed_kmh(self.baseline_speed_kmh);
        (haversine_km(position, origin) / speed * 60.0).ceil() as u32
    }
}

/// The same ETA for every bus.
#[derive(Debug, Clone, Copy)]
pub struct FixedEta(pub u32);

impl EtaSource for FixedEta {
    fn eta_minutes(&self, _snapshot: &BusTelemetrySnapshot, _origin: Position) -> u32 {
        self.0
    }
}
