use crate::dto::vehicle_dto::UpdateVehicleStatusRequest;
use crate::models::vehicle::{FleetStats, Vehicle};
use crate::state::SharedRegistry;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    registry: SharedRegistry,
}

impl VehicleController {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let registry = self.registry.lock().await;
        Ok(registry.list().to_vec())
    }

    pub async fn simulate(&self) -> AppResult<Vec<Vehicle>> {
        let mut registry = self.registry.lock().await;
        let (vehicles, outcome) = registry.simulate();

        tracing::info!(
            "🚚 Flota simulada: {} vehículos, {} cambios de estado",
            vehicles.len(),
            outcome.status_changes
        );

        Ok(vehicles.to_vec())
    }

    pub async fn update_by_provider(
        &self,
        request: UpdateVehicleStatusRequest,
    ) -> AppResult<Vehicle> {
        let mut registry = self.registry.lock().await;

        let vehicle = registry
            .update_by_provider(&request.provider_name, request.status)
            .map_err(|e| {
                tracing::warn!("❌ Actualización rechazada: {}", e);
                AppError::from(e)
            })?;

        tracing::info!(
            "✅ Vehículo {} ({}) actualizado a '{}'",
            vehicle.id,
            vehicle.provider_name,
            vehicle.status
        );

        Ok(vehicle.clone())
    }

    pub async fn stats(&self) -> AppResult<FleetStats> {
        let registry = self.registry.lock().await;
        Ok(registry.stats())
    }
}
