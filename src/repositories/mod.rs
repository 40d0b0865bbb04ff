//! Repositorios
//! 
//! Acceso a los datos de la flota. No hay base de datos: el registro vive en memoria.

pub mod seed_data;
pub mod vehicle_registry;

pub use vehicle_registry::{RegistryError, VehicleRegistry};
