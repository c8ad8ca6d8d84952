//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::engine::EngineConfig;
use crate::geo::{ApproachEta, EtaSource, FixedDistance, Haversine, TripDistance};

/// Longest accepted freshness window: one year.
pub const MAX_FRESHNESS_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Process-level configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Engine policy (freshness window, baseline speed).
    pub engine: EngineConfig,

    /// Use a fixed trip distance instead of great-circle distance (km).
    pub trip_distance_km: Option<f64>,

    /// ETA assumed for buses with no known position (minutes).
    pub default_eta_mins: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            engine: EngineConfig::default(),
            trip_distance_km: None,
            default_eta_mins: 15,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// Reads `BIND_ADDR`, `FRESHNESS_WINDOW_SECS`, `TRIP_DISTANCE_KM` and
    /// `DEFAULT_ETA_MINS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("BIND_ADDR") {
            config.bind_addr = value.parse().map_err(|_| ConfigError {
                var: "BIND_ADDR",
                value: value.clone(),
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup("FRESHNESS_WINDOW_SECS") {
            let secs: i64 = value.parse().map_err(|_| ConfigError {
                var: "FRESHNESS_WINDOW_SECS",
                value: value.clone(),
                reason: "expected whole seconds",
            })?;
            if secs < 0 {
                return Err(ConfigError {
                    var: "FRESHNESS_WINDOW_SECS",
                    value,
                    reason: "must not be negative",
                });
            }
            if secs > MAX_FRESHNESS_WINDOW_SECS {
                return Err(ConfigError {
                    var: "FRESHNESS_WINDOW_SECS",
                    value,
                    reason: "must be at most one year",
                });
            }
            config.engine.freshness_window_secs = secs;
        }

        if let Some(value) = lookup("TRIP_DISTANCE_KM") {
            let km: f64 = value.parse().map_err(|_| ConfigError {
                var: "TRIP_DISTANCE_KM",
                value: value.clone(),
                reason: "expected a number of kilometres",
            })?;
            if !km.is_finite() || km < 0.0 {
                return Err(ConfigError {
                    var: "TRIP_DISTANCE_KM",
                    value,
                    reason: "must be finite and non-negative",
                });
            }
            config.trip_distance_km = Some(km);
        }

        if let Some(value) = lookup("DEFAULT_ETA_MINS") {
            config.default_eta_mins = value.parse().map_err(|_| ConfigError {
                var: "DEFAULT_ETA_MINS",
                value: value.clone(),
                reason: "expected whole minutes",
            })?;
        }

        Ok(config)
    }

    /// The trip-distance source this configuration selects.
    pub fn trip_distance(&self) -> Arc<dyn TripDistance> {
        match self.trip_distance_km {
            Some(km) => Arc::new(FixedDistance(km)),
            None => Arc::new(Haversine),
        }
    }

    /// The ETA source this configuration selects.
    pub fn eta_source(&self) -> Arc<dyn EtaSource> {
        Arc::new(ApproachEta::new(
            self.engine.baseline_speed_kmh,
            self.default_eta_mins,
        ))
    }
}
