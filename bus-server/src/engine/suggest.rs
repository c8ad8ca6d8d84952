//! The suggestion pipeline.
//!
//! freshness filter -> score + badges per bus -> rank.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{BusTelemetrySnapshot, Position};
use crate::fleet::{FleetError, FleetRepository};
use crate::geo::{EtaSource, TripDistance};

use super::config::EngineConfig;
use super::freshness::select_active;
use super::rank::{SuggestionCandidate, rank};
use super::score::ScoreCalculator;

/// A passenger's trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionRequest {
    pub origin: Position,
    pub dest: Position,
}

impl SuggestionRequest {
    /// Create a new suggestion request.
    pub fn new(origin: Position, dest: Position) -> Self {
        Self { origin, dest }
    }
}

/// Ranks active buses for a trip.
///
/// The engine holds no fleet state. Given the same snapshots, time and
/// collaborators it always produces the same ranking.
pub struct SuggestionEngine {
    config: EngineConfig,
    calculator: ScoreCalculator,
    distance: Arc<dyn TripDistance>,
    eta: Arc<dyn EtaSource>,
}

impl SuggestionEngine {
    /// Create an engine using the given trip-distance and ETA sources.
    pub fn new(
        config: EngineConfig,
        distance: Arc<dyn TripDistance>,
        eta: Arc<dyn EtaSource>,
    ) -> Self {
        Self {
            calculator: ScoreCalculator::new(config.baseline_speed_kmh),
            config,
            distance,
            eta,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank the fresh subset of `snapshots` for `request`, best first.
    ///
    /// Returns an empty list when no snapshot is fresh.
    pub fn rank_snapshots(
        &self,
        snapshots: Vec<BusTelemetrySnapshot>,
        request: &SuggestionRequest,
        now: DateTime<Utc>,
    ) -> Vec<SuggestionCandidate> {
        let active = select_active(snapshots, now, self.config.freshness_window());
        if active.is_empty() {
            return Vec::new();
        }

        let trip_km = self.distance.distance_km(request.origin, request.dest);

        let candidates = active
            .iter()
            .map(|snapshot| {
                let eta = self.eta.eta_minutes(snapshot, request.origin);
                let score = self.calculator.score(snapshot, trip_km, eta);
                SuggestionCandidate::from_score(snapshot, &score)
            })
            .collect();

        let ranked = rank(candidates);
        debug!(
            active = ranked.len(),
            trip_km,
            best = ranked.first().map(|c| c.bus_id.as_str()),
            "ranked suggestions"
        );
        ranked
    }

    /// Fetch fresh snapshots from `fleet` and rank them.
    pub async fn suggest(
        &self,
        fleet: &dyn FleetRepository,
        request: &SuggestionRequest,
        now: DateTime<Utc>,
    ) -> Result<Vec<SuggestionCandidate>, FleetError> {
        let snapshots = fleet
            .fresh_snapshots(now, self.config.freshness_window())
            .await?;
        Ok(self.rank_snapshots(snapshots, request, now))
    }
}
