use crate::server::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use beacon_core::RoomSummary;
use tracing::error;

/// `GET /api/rooms`: the same listing `rooms-updated` pushes.
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<RoomSummary>>, StatusCode> {
    match state.rooms.rooms_snapshot().await {
        Ok(rooms) => Ok(Json(rooms)),
        Err(e) => {
            error!("Room listing unavailable: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}
