use bus_server::config::ServerConfig;
use bus_server::engine::SuggestionEngine;
use bus_server::fleet::InMemoryFleet;
use bus_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let engine = SuggestionEngine::new(
        config.engine.clone(),
        config.trip_distance(),
        config.eta_source(),
    );

    // Build app state
    let state = AppState::new(InMemoryFleet::new(), engine);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind_addr;
    info!(
        %addr,
        freshness_window_secs = config.engine.freshness_window_secs,
        trip_distance_km = ?config.trip_distance_km,
        "bus tracker listening"
    );
    info!("API endpoints:");
    info!("  GET  /health              - Health check");
    info!("  GET  /api/buses           - Active buses");
    info!("  GET  /api/bus/:busId      - One bus");
    info!("  POST /api/bus/location    - Driver location report");
    info!("  POST /api/bus/crowd       - Conductor crowd report");
    info!("  POST /api/routes/suggest  - Ranked bus suggestions");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
