//! Web layer for the bus tracker.
//!
//! Provides HTTP endpoints for driver and conductor telemetry and for
//! passenger route suggestions.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
