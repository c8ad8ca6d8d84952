//! Freshness filtering of telemetry snapshots.

use chrono::{DateTime, Duration, Utc};

use crate::domain::BusTelemetrySnapshot;

/// Whether a snapshot was updated within `window` of `now`.
///
/// The boundary is inclusive: a report exactly `window` old is still fresh.
/// A window reaching past the earliest representable time admits everything.
pub fn is_fresh(snapshot: &BusTelemetrySnapshot, now: DateTime<Utc>, window: Duration) -> bool {
    now.checked_sub_signed(window)
        .is_none_or(|cutoff| snapshot.last_updated >= cutoff)
}

/// Keep the snapshots recent enough to be trusted.
///
/// Input order is preserved. An empty result is a valid outcome, not an
/// error.
pub fn select_active<I>(snapshots: I, now: DateTime<Utc>, window: Duration) -> Vec<BusTelemetrySnapshot>
where
    I: IntoIterator<Item = BusTelemetrySnapshot>,
{
    snapshots
        .into_iter()
        .filter(|s| is_fresh(s, now, window))
        .collect()
}
