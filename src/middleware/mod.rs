//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS.

pub mod cors;

pub use cors::*;
