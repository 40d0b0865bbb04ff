use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::UpdateVehicleStatusRequest;
use crate::models::vehicle::{FleetStats, Vehicle};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/simulate", post(simulate_vehicles))
        .route("/update", post(update_vehicle_status))
        .route("/stats", get(fleet_stats))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.registry.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn simulate_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.registry.clone());
    let response = controller.simulate().await?;
    Ok(Json(response))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleStatusRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.registry.clone());
    let response = controller.update_by_provider(request).await?;
    Ok(Json(response))
}

async fn fleet_stats(
    State(state): State<AppState>,
) -> Result<Json<FleetStats>, AppError> {
    let controller = VehicleController::new(state.registry.clone());
    let response = controller.stats().await?;
    Ok(Json(response))
}
