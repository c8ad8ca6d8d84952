//! Fleet telemetry storage.
//!
//! The engine never touches storage directly. It is handed snapshots by a
//! [`FleetRepository`], which owns the create-or-update rules for driver
//! location reports and conductor crowd reports.

mod error;
mod memory;
mod update;

pub use error::FleetError;
pub use memory::InMemoryFleet;
pub use update::{CrowdUpdate, LocationUpdate};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::{BusId, BusTelemetrySnapshot};

/// Storage for the latest telemetry of every bus.
///
/// Writes are upserts: a report for an unknown bus creates it.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// Snapshots updated within `window` of `now` (inclusive).
    async fn fresh_snapshots(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<BusTelemetrySnapshot>, FleetError>;

    /// The snapshot for one bus, fresh or not.
    async fn get(&self, bus_id: &BusId) -> Result<Option<BusTelemetrySnapshot>, FleetError>;

    /// Store a whole snapshot, replacing any existing one for the bus.
    async fn upsert_snapshot(&self, snapshot: BusTelemetrySnapshot) -> Result<(), FleetError>;

    /// Apply a driver location report, returning the stored snapshot.
    async fn record_location(
        &self,
        update: LocationUpdate,
        now: DateTime<Utc>,
    ) -> Result<BusTelemetrySnapshot, FleetError>;

    /// Apply a conductor crowd report, returning the stored snapshot.
    async fn record_crowd(
        &self,
        update: CrowdUpdate,
        now: DateTime<Utc>,
    ) -> Result<BusTelemetrySnapshot, FleetError>;
}
