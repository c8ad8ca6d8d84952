//! Qualitative badges shown next to a suggestion.

use std::fmt;

use serde::{Serialize, Serializer};

/// A short tag derived from a bus's sub-scores.
///
/// Serialized as its display label, e.g. `"Low Crowd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    LowCrowd,
    Fastest,
    ArrivingSoon,
}

impl Badge {
    /// The label clients display.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::LowCrowd => "Low Crowd",
            Badge::Fastest => "Fastest",
            Badge::ArrivingSoon => "Arriving Soon",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Speed scores strictly above this earn [`Badge::Fastest`].
pub const FASTEST_ABOVE: f64 = 80.0;

/// Derive badges in their fixed order: crowd, speed, arrival.
pub fn badges(crowd_score: u8, speed_score: f64, eta_minutes: u32) -> Vec<Badge> {
    [
        (crowd_score == 100).then_some(Badge::LowCrowd),
        (speed_score > FASTEST_ABOVE).then_some(Badge::Fastest),
        (eta_minutes < super::score::ETA_SOON_MINS).then_some(Badge::ArrivingSoon),
    ]
    .into_iter()
    .flatten()
    .collect()
}
