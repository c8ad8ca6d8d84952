//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::SuggestionEngine;
use crate::fleet::FleetRepository;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Latest telemetry for every bus
    pub fleet: Arc<dyn FleetRepository>,

    /// Suggestion scoring and ranking
    pub engine: Arc<SuggestionEngine>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(fleet: impl FleetRepository + 'static, engine: SuggestionEngine) -> Self {
        Self {
            fleet: Arc::new(fleet),
            engine: Arc::new(engine),
        }
    }
}
