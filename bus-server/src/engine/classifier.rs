//! Crowd classification from conductor head counts.

use crate::domain::CrowdLevel;

/// Head count at which a bus becomes `Medium`.
pub const MEDIUM_FROM: u32 = 30;

/// Head count at which a bus becomes `High`.
pub const HIGH_FROM: u32 = 50;

/// Map a passenger count onto a crowd level.
pub fn level_for_count(passenger_count: u32) -> CrowdLevel {
    if passenger_count < MEDIUM_FROM {
        CrowdLevel::Low
    } else if passenger_count < HIGH_FROM {
        CrowdLevel::Medium
    } else {
        CrowdLevel::High
    }
}

/// Resolve the crowd level for a conductor report.
///
/// A passenger count always wins over a supplied label. A recognised label
/// is used as-is, and an unrecognised one falls back to `Low` rather than
/// rejecting the report. Returns `None` when neither is given (an empty label
/// counts as not given), meaning the stored level should be left unchanged.
pub fn classify(passenger_count: Option<u32>, supplied_level: Option<&str>) -> Option<CrowdLevel> {
    if let Some(count) = passenger_count {
        return Some(level_for_count(count));
    }

    supplied_level
        .filter(|label| !label.is_empty())
        .map(CrowdLevel::coerce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_boundaries() {
        assert_eq!(level_for_count(0), CrowdLevel::Low);
        assert_eq!(level_for_count(29), CrowdLevel::Low);
        assert_eq!(level_for_count(30), CrowdLevel::Medium);
        assert_eq!(level_for_count(49), CrowdLevel::Medium);
        assert_eq!(level_for_count(50), CrowdLevel::High);
        assert_eq!(level_for_count(120), CrowdLevel::High);
    }

    #[test]
    fn count_overrides_supplied_level() {
        assert_eq!(classify(Some(45), Some("High")), Some(CrowdLevel::Medium));
        assert_eq!(classify(Some(5), Some("High")), Some(CrowdLevel::Low));
        assert_eq!(classify(Some(60), Some("bogus")), Some(CrowdLevel::High));
    }

    #[test]
    fn supplied_level_used_without_count() {
        assert_eq!(classify(None, Some("Medium")), Some(CrowdLevel::Medium));
        assert_eq!(classify(None, Some("High")), Some(CrowdLevel::High));
    }

    #[test]
    fn invalid_label_falls_back_to_low() {
        assert_eq!(classify(None, Some("Crowded")), Some(CrowdLevel::Low));
        assert_eq!(classify(None, Some("medium")), Some(CrowdLevel::Low));
    }

    #[test]
    fn nothing_supplied_leaves_level_unchanged() {
        assert_eq!(classify(None, None), None);
        assert_eq!(classify(None, Some("")), None);
    }
}
