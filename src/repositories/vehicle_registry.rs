//! Registro en memoria de la flota
//!
//! Colección ordenada de vehículos que vive durante todo el proceso. Solo
//! admite mutación in-place vía `simulate` y `update_by_provider`.

use crate::models::vehicle::{FleetStats, Vehicle, VehicleStatus};
use crate::repositories::seed_data::initial_vehicles;
use crate::services::fleet_simulation::{drift_vehicles, DriftOutcome};
use rand::rngs::StdRng;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Provider '{provider_name}' not found")]
    ProviderNotFound { provider_name: String },

    #[error("Duplicate vehicle id '{0}'")]
    DuplicateId(String),
}

pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
    rng: StdRng,
}

impl VehicleRegistry {
    /// Crear un registro validando que no haya ids repetidos
    pub fn new(vehicles: Vec<Vehicle>, rng: StdRng) -> Result<Self, RegistryError> {
        if let Some(id) = first_duplicate_id(&vehicles) {
            return Err(RegistryError::DuplicateId(id));
        }

        Ok(Self { vehicles, rng })
    }

    /// Registro con la flota de referencia
    pub fn seeded(rng: StdRng) -> Self {
        Self {
            vehicles: initial_vehicles(),
            rng,
        }
    }

    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Simular movimiento y cambios de estado de toda la flota
    pub fn simulate(&mut self) -> (&[Vehicle], DriftOutcome) {
        let outcome = drift_vehicles(&mut self.vehicles, &mut self.rng);
        tracing::debug!(
            "🎲 Simulación aplicada a {} vehículos ({} sorteos de estado, {} cambios)",
            self.vehicles.len(),
            outcome.status_redraws,
            outcome.status_changes
        );
        (&self.vehicles, outcome)
    }

    /// Actualizar el estado del primer vehículo cuyo proveedor coincida exactamente
    pub fn update_by_provider(
        &mut self,
        provider_name: &str,
        status: VehicleStatus,
    ) -> Result<&Vehicle, RegistryError> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.provider_name == provider_name)
            .ok_or_else(|| RegistryError::ProviderNotFound {
                provider_name: provider_name.to_string(),
            })?;

        if !status.is_known() {
            tracing::warn!(
                "⚠️ Estado no reconocido '{}' guardado para {} ({})",
                status,
                vehicle.id,
                provider_name
            );
        }

        vehicle.status = status;
        Ok(vehicle)
    }

    pub fn stats(&self) -> FleetStats {
        FleetStats::from_vehicles(&self.vehicles)
    }
}

fn first_duplicate_id(vehicles: &[Vehicle]) -> Option<String> {
    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        if !seen.insert(vehicle.id.as_str()) {
            return Some(vehicle.id.clone());
        }
    }
    None
}
