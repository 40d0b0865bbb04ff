//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El registro de vehículos se guarda detrás de
//! un único Mutex: cada handler lo bloquea durante toda la operación.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_registry::VehicleRegistry;

pub type SharedRegistry = Arc<Mutex<VehicleRegistry>>;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub registry: SharedRegistry,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, registry: VehicleRegistry) -> Self {
        Self {
            config,
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Estado con la flota de referencia y el generador según la configuración
    pub fn seeded(config: EnvironmentConfig) -> Self {
        let rng = match config.simulation_seed {
            Some(seed) => {
                tracing::info!("🎲 Simulación con semilla fija: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self::new(config, VehicleRegistry::seeded(rng))
    }
}
