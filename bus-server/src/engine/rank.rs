//! Suggestion ranking.
//!
//! Orders scored buses so the best option surfaces first and flags it for
//! highlighting.

use serde::Serialize;

use crate::domain::{BusId, BusTelemetrySnapshot, CrowdLevel};

use super::badges::{Badge, badges};
use super::score::ScoreBreakdown;

/// One ranked bus in a suggestion response.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCandidate {
    pub bus_id: BusId,
    pub crowd_level: CrowdLevel,
    pub speed_kmh: f64,
    pub duration_minutes: u32,
    pub eta_minutes: u32,
    pub total_score: u8,
    pub badges: Vec<Badge>,
    pub is_best_choice: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub male_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub female_count: Option<u32>,
}

impl SuggestionCandidate {
    /// Project a scored snapshot into an (unranked) candidate.
    pub fn from_score(snapshot: &BusTelemetrySnapshot, score: &ScoreBreakdown) -> Self {
        Self {
            bus_id: snapshot.bus_id.clone(),
            crowd_level: snapshot.crowd_level,
            speed_kmh: score.speed_kmh,
            duration_minutes: score.duration_minutes,
            eta_minutes: score.eta_minutes,
            total_score: score.total_score,
            badges: badges(score.crowd_score, score.speed_score, score.eta_minutes),
            is_best_choice: false,
            route_id: snapshot.route_id.clone(),
            passenger_count: snapshot.passenger_count,
            male_count: snapshot.male_count,
            female_count: snapshot.female_count,
        }
    }
}

/// Rank candidates best-first.
///
/// Sorts by total score, highest first. The sort is stable, so candidates
/// with equal scores keep their input order. The first candidate, if any,
/// is flagged as the best choice; every other flag is cleared.
pub fn rank(mut candidates: Vec<SuggestionCandidate>) -> Vec<SuggestionCandidate> {
    candidates.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    for (i, candidate) in candidates.iter_mut().enumerate() {
        candidate.is_best_choice = i == 0;
    }

    candidates
}
