use axum::{extract::State, routing::get, Json, Router};
use crate::dto::vehicle_dto::HealthResponse;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check: "empty" si el registro no tiene vehículos
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (vehicles, empty) = {
        let registry = state.registry.lock().await;
        (registry.len(), registry.is_empty())
    };

    Json(HealthResponse {
        status: if empty { "empty" } else { "ok" },
        service: "tow-fleet",
        vehicles,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
