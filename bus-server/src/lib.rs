//! Live bus tracker server.
//!
//! Tracks a bus fleet from driver and conductor telemetry and answers:
//! "which of the buses running right now should I take?"

pub mod config;
pub mod domain;
pub mod engine;
pub mod fleet;
pub mod geo;
pub mod web;
