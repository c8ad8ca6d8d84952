//! In-memory fleet store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{BusId, BusTelemetrySnapshot};
use crate::engine::select_active;

use super::{CrowdUpdate, FleetError, FleetRepository, LocationUpdate};

/// Thread-safe in-memory telemetry store.
///
/// Snapshots are kept ordered by bus id, so listings (and therefore ranking
/// ties) come out in a stable order. Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryFleet {
    inner: Arc<RwLock<BTreeMap<BusId, BusTelemetrySnapshot>>>,
}

impl InMemoryFleet {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with snapshots.
    pub fn with_snapshots(snapshots: impl IntoIterator<Item = BusTelemetrySnapshot>) -> Self {
        let map = snapshots
            .into_iter()
            .map(|s| (s.bus_id.clone(), s))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of buses ever seen.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if no bus has reported yet.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleet {
    async fn fresh_snapshots(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<BusTelemetrySnapshot>, FleetError> {
        let guard = self.inner.read().await;
        let fresh = select_active(guard.values().cloned(), now, window);
        debug!(total = guard.len(), fresh = fresh.len(), "listed fresh snapshots");
        Ok(fresh)
    }

    async fn get(&self, bus_id: &BusId) -> Result<Option<BusTelemetrySnapshot>, FleetError> {
        let guard = self.inner.read().await;
        Ok(guard.get(bus_id).cloned())
    }

    async fn upsert_snapshot(&self, snapshot: BusTelemetrySnapshot) -> Result<(), FleetError> {
        let mut guard = self.inner.write().await;
        guard.insert(snapshot.bus_id.clone(), snapshot);
        Ok(())
    }

    async fn record_location(
        &self,
        update: LocationUpdate,
        now: DateTime<Utc>,
    ) -> Result<BusTelemetrySnapshot, FleetError> {
        let mut guard = self.inner.write().await;
        let bus_id = update.bus_id.clone();
        let existing = guard.remove(&bus_id);
        let created = existing.is_none();

        let snapshot = update.apply(existing, now);
        guard.insert(bus_id.clone(), snapshot.clone());

        debug!(bus_id = %bus_id, created, "recorded location");
        Ok(snapshot)
    }

    async fn record_crowd(
        &self,
        update: CrowdUpdate,
        now: DateTime<Utc>,
    ) -> Result<BusTelemetrySnapshot, FleetError> {
        let mut guard = self.inner.write().await;
        let bus_id = update.bus_id.clone();
        let existing = guard.remove(&bus_id);
        let created = existing.is_none();

        let snapshot = update.apply(existing, now);
        guard.insert(bus_id.clone(), snapshot.clone());

        debug!(
            bus_id = %bus_id,
            created,
            level = %snapshot.crowd_level,
            "recorded crowd report"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CrowdLevel, Position};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap()
    }

    fn id(s: &str) -> BusId {
        BusId::parse(s).unwrap()
    }

    fn pos() -> Position {
        Position::new(22.300094254370055, 73.20553592280895).unwrap()
    }

    #[tokio::test]
    async fn location_upserts() {
        let fleet = InMemoryFleet::new();
        assert!(fleet.is_empty().await);

        let update = LocationUpdate::new(id("bus001"), pos(), Some(35.0)).unwrap();
        let first = fleet.record_location(update, now()).await.unwrap();
        assert_eq!(first.speed_kmh, Some(35.0));
        assert_eq!(fleet.len().await, 1);

        let later = now() + Duration::seconds(20);
        let update = LocationUpdate::new(id("bus001"), pos(), Some(41.0)).unwrap();
        let second = fleet.record_location(update, later).await.unwrap();
        assert_eq!(second.speed_kmh, Some(41.0));
        assert_eq!(second.last_updated, later);
        assert_eq!(fleet.len().await, 1);
    }

    #[tokio::test]
    async fn crowd_report_for_unknown_bus_creates_it() {
        let fleet = InMemoryFleet::new();
        let update = CrowdUpdate {
            passenger_count: Some(52),
            ..CrowdUpdate::new(id("bus009"))
        };

        let snap = fleet.record_crowd(update, now()).await.unwrap();
        assert_eq!(snap.crowd_level, CrowdLevel::High);

        let stored = fleet.get(&id("bus009")).await.unwrap().unwrap();
        assert_eq!(stored, snap);
    }

    #[tokio::test]
    async fn crowd_report_keeps_location() {
        let fleet = InMemoryFleet::new();
        let update = LocationUpdate::new(id("bus002"), pos(), Some(28.0)).unwrap();
        fleet.record_location(update, now()).await.unwrap();

        let update = CrowdUpdate {
            crowd_level: Some("Medium".into()),
            ..CrowdUpdate::new(id("bus002"))
        };
        let snap = fleet
            .record_crowd(update, now() + Duration::seconds(5))
            .await
            .unwrap();

        assert_eq!(snap.position, Some(pos()));
        assert_eq!(snap.speed_kmh, Some(28.0));
        assert_eq!(snap.crowd_level, CrowdLevel::Medium);
    }

    #[tokio::test]
    async fn fresh_snapshots_filters_and_orders_by_id() {
        let fleet = InMemoryFleet::with_snapshots(vec![
            BusTelemetrySnapshot::new(id("bus003"), now() - Duration::minutes(1)),
            BusTelemetrySnapshot::new(id("bus001"), now() - Duration::minutes(5)),
            BusTelemetrySnapshot::new(id("bus002"), now() - Duration::minutes(9)),
        ]);

        let fresh = fleet
            .fresh_snapshots(now(), Duration::minutes(5))
            .await
            .unwrap();
        let ids: Vec<_> = fresh.iter().map(|s| s.bus_id.as_str()).collect();
        assert_eq!(ids, vec!["bus001", "bus003"]);
    }

    #[tokio::test]
    async fn upsert_snapshot_replaces() {
        let fleet = InMemoryFleet::new();
        fleet
            .upsert_snapshot(BusTelemetrySnapshot::new(id("bus001"), now()).with_speed(10.0))
            .await
            .unwrap();
        fleet
            .upsert_snapshot(BusTelemetrySnapshot::new(id("bus001"), now()).with_speed(20.0))
            .await
            .unwrap();

        let stored = fleet.get(&id("bus001")).await.unwrap().unwrap();
        assert_eq!(stored.speed_kmh, Some(20.0));
        assert_eq!(fleet.len().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let fleet = InMemoryFleet::new();
        assert!(fleet.get(&id("nope")).await.unwrap().is_none());
    }
}
