//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota de grúas y su estado.
//! Los nombres de campo JSON siguen el contrato del cliente (camelCase).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado del vehículo
///
/// Los tres estados conocidos se serializan en title-case ("Active", "Busy",
/// "Offline"). Cualquier otro string recibido en la actualización por
/// proveedor se guarda tal cual en `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VehicleStatus {
    Active,
    Busy,
    Offline,
    Other(String),
}

impl VehicleStatus {
    /// Estados que puede asignar la simulación
    pub const KNOWN: [VehicleStatus; 3] = [
        VehicleStatus::Active,
        VehicleStatus::Busy,
        VehicleStatus::Offline,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Busy => "Busy",
            VehicleStatus::Offline => "Offline",
            VehicleStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VehicleStatus::Other(_))
    }
}

impl From<String> for VehicleStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Active" => VehicleStatus::Active,
            "Busy" => VehicleStatus::Busy,
            "Offline" => VehicleStatus::Offline,
            _ => VehicleStatus::Other(raw),
        }
    }
}

impl From<&str> for VehicleStatus {
    fn from(raw: &str) -> Self {
        VehicleStatus::from(raw.to_string())
    }
}

impl From<VehicleStatus> for String {
    fn from(status: VehicleStatus) -> Self {
        match status {
            VehicleStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle principal - una grúa de la flota simulada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub status: VehicleStatus,
    pub provider_name: String,
    pub driver_name: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: f64,
}

impl Vehicle {
    pub fn new(
        id: &str,
        status: VehicleStatus,
        provider_name: &str,
        driver_name: &str,
        lat: f64,
        lng: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            status,
            provider_name: provider_name.to_string(),
            driver_name: driver_name.to_string(),
            lat,
            lng,
            rating,
        }
    }
}

/// Resumen de la flota por estado
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub busy: usize,
    pub offline: usize,
    pub other: usize,
}

impl FleetStats {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        vehicles.iter().fold(
            FleetStats {
                total: vehicles.len(),
                ..Default::default()
            },
            |mut stats, vehicle| {
                match vehicle.status {
                    VehicleStatus::Active => stats.active += 1,
                    VehicleStatus::Busy => stats.busy += 1,
                    VehicleStatus::Offline => stats.offline += 1,
                    VehicleStatus::Other(_) => stats.other += 1,
                }
                stats
            },
        )
    }
}
