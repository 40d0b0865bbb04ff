//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación que no depende
//! de HTTP ni del estado compartido.

pub mod fleet_simulation;

pub use fleet_simulation::*;
