//! Smart score calculation.
//!
//! Each active bus gets three sub-scores in `[0, 100]`:
//!
//! - crowd: how empty the bus is,
//! - speed: linear in speed, full marks at 60 km/h,
//! - ETA: how soon the bus reaches the passenger.
//!
//! The total is a fixed 40/40/20 weighting of the three, rounded.

use crate::domain::{BusTelemetrySnapshot, CrowdLevel};

/// Speed earning a full speed score (km/h).
pub const REFERENCE_SPEED_KMH: f64 = 60.0;

pub const CROWD_WEIGHT: f64 = 0.4;
pub const SPEED_WEIGHT: f64 = 0.4;
pub const ETA_WEIGHT: f64 = 0.2;

/// ETAs below this many minutes score 100.
pub const ETA_SOON_MINS: u32 = 5;

/// ETAs below this many minutes (and not soon) score 50.
pub const ETA_NEAR_MINS: u32 = 15;

/// Sub-scores and derived figures for one bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Speed used for the calculation, after defaulting (km/h).
    pub speed_kmh: f64,
    pub crowd_score: u8,
    /// Unrounded; badges compare against the exact value.
    pub speed_score: f64,
    pub eta_minutes: u32,
    pub eta_score: u8,
    pub duration_minutes: u32,
    pub total_score: u8,
}

/// Crowd sub-score.
pub fn crowd_score(level: CrowdLevel) -> u8 {
    match level {
        CrowdLevel::Low => 100,
        CrowdLevel::Medium => 50,
        CrowdLevel::High => 0,
    }
}

/// Speed sub-score, capped at 100.
pub fn speed_score(speed_kmh: f64) -> f64 {
    (speed_kmh / REFERENCE_SPEED_KMH * 100.0).clamp(0.0, 100.0)
}

/// ETA sub-score.
pub fn eta_score(eta_minutes: u32) -> u8 {
    if eta_minutes < ETA_SOON_MINS {
        100
    } else if eta_minutes < ETA_NEAR_MINS {
        50
    } else {
        0
    }
}

/// Trip duration in whole minutes at a constant speed.
pub fn duration_minutes(trip_distance_km: f64, speed_kmh: f64) -> u32 {
    // Float-to-int `as` saturates, and maps NaN to zero.
    (trip_distance_km / speed_kmh * 60.0).round() as u32
}

/// Weighted composite of the three sub-scores.
pub fn total_score(crowd_score: u8, speed_score: f64, eta_score: u8) -> u8 {
    let total = f64::from(crowd_score) * CROWD_WEIGHT
        + speed_score * SPEED_WEIGHT
        + f64::from(eta_score) * ETA_WEIGHT;
    total.round().clamp(0.0, 100.0) as u8
}

/// Computes score breakdowns for telemetry snapshots.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCalculator {
    baseline_speed_kmh: f64,
}

impl ScoreCalculator {
    /// Create a calculator that assumes `baseline_speed_kmh` for buses
    /// reporting no usable speed.
    pub fn new(baseline_speed_kmh: f64) -> Self {
        Self { baseline_speed_kmh }
    }

    /// Score one bus for a trip of `trip_distance_km`, given an externally
    /// supplied ETA.
    pub fn score(
        &self,
        snapshot: &BusTelemetrySnapshot,
        trip_distance_km: f64,
        eta_minutes: u32,
    ) -> ScoreBreakdown {
        let speed_kmh = snapshot.effective_speed_kmh(self.baseline_speed_kmh);
        let crowd = crowd_score(snapshot.crowd_level);
        let speed = speed_score(speed_kmh);
        let eta = eta_score(eta_minutes);

        ScoreBreakdown {
            speed_kmh,
            crowd_score: crowd,
            speed_score: speed,
            eta_minutes,
            eta_score: eta,
            duration_minutes: duration_minutes(trip_distance_km, speed_kmh),
            total_score: total_score(crowd, speed, eta),
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new(30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusId;
    use chrono::{TimeZone, Utc};

    fn snapshot(speed: Option<f64>, level: CrowdLevel) -> BusTelemetrySnapshot {
        let ts = Utc.with_ymd_and_hms(2026, 2, 9, 17, 45, 0).unwrap();
        let mut snap =
            BusTelemetrySnapshot::new(BusId::parse("bus001").unwrap(), ts).with_crowd_level(level);
        snap.speed_kmh = speed;
        snap
    }

    #[test]
    fn demo_bus_scores() {
        let snap = snapshot(Some(40.0), CrowdLevel::Low);
        let breakdown = ScoreCalculator::default().score(&snap, 5.2, 4);

        assert_eq!(breakdown.duration_minutes, 8);
        assert_eq!(breakdown.crowd_score, 100);
        assert_eq!(breakdown.speed_score.round() as u8, 67);
        assert_eq!(breakdown.eta_score, 100);
        assert_eq!(breakdown.total_score, 87);
    }

    #[test]
    fn missing_or_zero_speed_uses_baseline() {
        let calc = ScoreCalculator::default();

        let breakdown = calc.score(&snapshot(None, CrowdLevel::Medium), 5.2, 10);
        assert_eq!(breakdown.speed_kmh, 30.0);
        assert_eq!(breakdown.speed_score, 50.0);
        assert_eq!(breakdown.duration_minutes, 10);

        let breakdown = calc.score(&snapshot(Some(0.0), CrowdLevel::Medium), 5.2, 10);
        assert_eq!(breakdown.speed_kmh, 30.0);
    }

    #[test]
    fn crowd_scores() {
        assert_eq!(crowd_score(CrowdLevel::Low), 100);
        assert_eq!(crowd_score(CrowdLevel::Medium), 50);
        assert_eq!(crowd_score(CrowdLevel::High), 0);
    }

    #[test]
    fn speed_score_caps_at_reference() {
        assert_eq!(speed_score(60.0), 100.0);
        assert_eq!(speed_score(95.0), 100.0);
        assert_eq!(speed_score(30.0), 50.0);
        assert_eq!(speed_score(0.0), 0.0);
    }

    #[test]
    fn eta_score_boundaries() {
        assert_eq!(eta_score(0), 100);
        assert_eq!(eta_score(4), 100);
        assert_eq!(eta_score(5), 50);
        assert_eq!(eta_score(14), 50);
        assert_eq!(eta_score(15), 0);
        assert_eq!(eta_score(40), 0);
    }

    #[test]
    fn total_score_weights() {
        assert_eq!(total_score(100, 100.0, 100), 100);
        assert_eq!(total_score(0, 0.0, 0), 0);
        assert_eq!(total_score(50, 50.0, 50), 50);
        // 0 * 0.4 + 100 * 0.4 + 50 * 0.2 = 50
        assert_eq!(total_score(0, 100.0, 50), 50);
    }

    #[test]
    fn custom_baseline() {
        let calc = ScoreCalculator::new(20.0);
        let breakdown = calc.score(&snapshot(None, CrowdLevel::High), 10.0, 20);
        assert_eq!(breakdown.speed_kmh, 20.0);
        assert_eq!(breakdown.duration_minutes, 30);
        assert_eq!(breakdown.total_score, 13);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn level_strategy() -> impl Strategy<Value = CrowdLevel> {
        prop_oneof![
            Just(CrowdLevel::Low),
            Just(CrowdLevel::Medium),
            Just(CrowdLevel::High),
        ]
    }

    proptest! {
        #[test]
        fn speed_score_monotonic(a in 0.0f64..200.0, b in 0.0f64..200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(speed_score(lo) <= speed_score(hi));
            if lo >= REFERENCE_SPEED_KMH {
                prop_assert_eq!(speed_score(lo), 100.0);
            }
        }

        #[test]
        fn total_in_range(level in level_strategy(), speed in 0.0f64..300.0, eta in 0u32..120) {
            let total = total_score(crowd_score(level), speed_score(speed), eta_score(eta));
            prop_assert!(total <= 100);
        }

        #[test]
        fn total_matches_formula(level in level_strategy(), speed in 0.0f64..300.0, eta in 0u32..120) {
            let c = crowd_score(level);
            let s = speed_score(speed);
            let e = eta_score(eta);
            let expected = (f64::from(c) * 0.4 + s * 0.4 + f64::from(e) * 0.2).round();
            prop_assert_eq!(f64::from(total_score(c, s, e)), expected);
        }

        #[test]
        fn eta_score_non_increasing(a in 0u32..60, b in 0u32..60) {
            if a <= b {
                prop_assert!(eta_score(a) >= eta_score(b));
            }
        }
    }
}
