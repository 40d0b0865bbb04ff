//! Backend de la flota de grúas
//! 
//! Registro en memoria de vehículos con endpoints para listar, simular
//! movimiento y actualizar el estado por proveedor.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
