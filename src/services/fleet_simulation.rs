use crate::models::vehicle::{Vehicle, VehicleStatus};
use rand::seq::SliceRandom;
use rand::Rng;

/// Desplazamiento máximo total (en grados) por llamada: el offset cae en [-0.005, 0.005]
pub const MAX_POSITION_STEP: f64 = 0.01;

/// Probabilidad de reasignar el estado de un vehículo en cada simulación
pub const STATUS_CHANGE_PROBABILITY: f64 = 0.10;

/// Resultado de aplicar una ronda de simulación
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriftOutcome {
    /// Vehículos a los que se les sorteó un nuevo estado
    pub status_redraws: usize,
    /// Vehículos cuyo estado terminó siendo distinto al anterior
    pub status_changes: usize,
}

/// Offset uniforme en [-MAX_POSITION_STEP / 2, MAX_POSITION_STEP / 2]
fn position_offset<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * MAX_POSITION_STEP
}

/// Mueve cada vehículo un poco y, con probabilidad 0.10, le sortea un estado
/// entre Active/Busy/Offline sin importar el estado actual.
pub fn drift_vehicles<R: Rng + ?Sized>(vehicles: &mut [Vehicle], rng: &mut R) -> DriftOutcome {
    let mut outcome = DriftOutcome::default();

    for vehicle in vehicles.iter_mut() {
        vehicle.lat += position_offset(rng);
        vehicle.lng += position_offset(rng);

        if rng.gen_bool(STATUS_CHANGE_PROBABILITY) {
            if let Some(next) = VehicleStatus::KNOWN.choose(rng) {
                outcome.status_redraws += 1;
                if *next != vehicle.status {
                    outcome.status_changes += 1;
                }
                vehicle.status = next.clone();
            }
        }
    }

    outcome
}
