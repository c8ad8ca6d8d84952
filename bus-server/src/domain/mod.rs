//! Domain types for the bus tracker.
//!
//! This module contains the validated model of a live bus fleet. Types
//! enforce their invariants at construction time, so the engine can trust
//! every value it receives.

mod bus_id;
mod crowd;
mod error;
mod position;
mod snapshot;

pub use bus_id::{BusId, InvalidBusId};
pub use crowd::CrowdLevel;
pub use error::{DomainError, validate_count, validate_speed};
pub use position::{InvalidPosition, Position};
pub use snapshot::BusTelemetrySnapshot;
