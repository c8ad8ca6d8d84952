//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{BusId, DomainError};
use crate::fleet::FleetError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/buses", get(active_buses))
        .route("/api/bus/location", post(update_location))
        .route("/api/bus/crowd", post(update_crowd))
        .route("/api/bus/:bus_id", get(get_bus))
        .route("/api/routes/suggest", post(suggest_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Driver app: report position and speed.
async fn update_location(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LocationUpdateResponse>, AppError> {
    let req: LocationUpdateRequest = parse_json(&body)?;
    let update = req.into_update()?;

    let bus = state.fleet.record_location(update, Utc::now()).await?;

    Ok(Json(LocationUpdateResponse {
        success: true,
        message: "Location updated".to_string(),
        bus,
    }))
}

/// Conductor app: report crowding and head counts.
async fn update_crowd(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CrowdUpdateResponse>, AppError> {
    let req: CrowdUpdateRequest = parse_json(&body)?;
    let update = req.into_update()?;
    let reported_count = update.passenger_count;

    let bus = state.fleet.record_crowd(update, Utc::now()).await?;
    info!(
        bus_id = %bus.bus_id,
        level = %bus.crowd_level,
        passengers = ?bus.passenger_count,
        "crowd updated"
    );

    Ok(Json(CrowdUpdateResponse::from_snapshot(bus, reported_count)))
}

/// Passenger app: buses that have reported recently.
async fn active_buses(State(state): State<AppState>) -> Result<Json<BusesResponse>, AppError> {
    let window = state.engine.config().freshness_window();
    let buses = state.fleet.fresh_snapshots(Utc::now(), window).await?;

    Ok(Json(BusesResponse {
        success: true,
        buses,
    }))
}

/// Last-known state of one bus.
async fn get_bus(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
) -> Result<Json<BusResponse>, AppError> {
    let bus_id = BusId::parse(&bus_id).map_err(DomainError::from)?;

    let bus = state
        .fleet
        .get(&bus_id)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: "Bus not found".to_string(),
        })?;

    Ok(Json(BusResponse { success: true, bus }))
}

/// Rank active buses for a passenger's trip.
async fn suggest_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuggestResponse>, AppError> {
    let req: SuggestRequest = parse_json(&body)?;
    let request = req.into_request()?;

    let routes = state
        .engine
        .suggest(state.fleet.as_ref(), &request, Utc::now())
        .await?;
    info!(
        origin = %request.origin,
        dest = %request.dest,
        candidates = routes.len(),
        "suggested routes"
    );

    Ok(Json(SuggestResponse::from_routes(routes)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<FleetError> for AppError {
    fn from(e: FleetError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            success: false,
            message,
        });
        (status, body).into_response()
    }
}
