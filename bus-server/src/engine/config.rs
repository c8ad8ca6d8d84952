//! Engine configuration.

use chrono::Duration;

/// Configuration parameters for the suggestion engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How recently a bus must have reported to count as active (seconds).
    /// The boundary is inclusive.
    pub freshness_window_secs: i64,

    /// Speed assumed for a bus that reports none, or reports zero (km/h).
    pub baseline_speed_kmh: f64,
}

impl EngineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(freshness_window_secs: i64, baseline_speed_kmh: f64) -> Self {
        Self {
            freshness_window_secs,
            baseline_speed_kmh,
        }
    }

    /// Returns the freshness window as a Duration.
    ///
    /// Saturates at the largest representable duration.
    pub fn freshness_window(&self) -> Duration {
        Duration::try_seconds(self.freshness_window_secs).unwrap_or(Duration::MAX)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            freshness_window_secs: 300, // 5 minutes
            baseline_speed_kmh: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.freshness_window_secs, 300);
        assert_eq!(config.baseline_speed_kmh, 30.0);
        assert_eq!(config.freshness_window(), Duration::minutes(5));
    }

    #[test]
    fn custom_config() {
        let config = EngineConfig::new(90, 25.0);

        assert_eq!(config.freshness_window(), Duration::seconds(90));
        assert_eq!(config.baseline_speed_kmh, 25.0);
    }

    #[test]
    fn out_of_range_window_saturates() {
        let config = EngineConfig::new(i64::MAX, 30.0);
        assert_eq!(config.freshness_window(), Duration::MAX);
    }
}
