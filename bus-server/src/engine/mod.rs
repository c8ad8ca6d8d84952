//! Suggestion engine.
//!
//! Given the latest telemetry of a bus fleet and a passenger's trip, this
//! module picks the buses that are currently active, scores each one on
//! crowding, speed and arrival time, and ranks them best-first.
//!
//! Crowd classification also lives here; it runs when a conductor reports a
//! head count, upstream of any suggestion request.

mod badges;
mod classifier;
mod config;
mod freshness;
mod rank;
mod score;
mod suggest;

pub use badges::{Badge, badges};
pub use classifier::{HIGH_FROM, MEDIUM_FROM, classify, level_for_count};
pub use config::EngineConfig;
pub use freshness::{is_fresh, select_active};
pub use rank::{SuggestionCandidate, rank};
pub use score::{
    ScoreBreakdown, ScoreCalculator, crowd_score, duration_minutes, eta_score, speed_score,
    total_score,
};
pub use suggest::{SuggestionEngine, SuggestionRequest};
