//! Crowd level tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete occupancy tier attached to a bus.
///
/// Serialized as `"Low"`, `"Medium"` or `"High"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CrowdLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// All levels, least crowded first.
    pub const ALL: [CrowdLevel; 3] = [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High];

    /// Match an exact label (`"Low"`, `"Medium"`, `"High"`).
    ///
    /// Matching is case-sensitive; anything else returns `None`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(CrowdLevel::Low),
            "Medium" => Some(CrowdLevel::Medium),
            "High" => Some(CrowdLevel::High),
            _ => None,
        }
    }

    /// Coerce a raw label into a level, falling back to `Low` for
    /// unrecognised input.
    pub fn coerce(s: &str) -> Self {
        Self::from_label(s).unwrap_or(CrowdLevel::Low)
    }

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
