//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores y validación
//! de los cuerpos JSON.

pub mod errors;
pub mod validation;
