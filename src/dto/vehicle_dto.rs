use serde::{Deserialize, Serialize};

use crate::models::vehicle::VehicleStatus;

// Request para actualizar el estado por nombre de proveedor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleStatusRequest {
    pub provider_name: String,
    pub status: VehicleStatus,
}

// Response del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub vehicles: usize,
    pub timestamp: String,
}
