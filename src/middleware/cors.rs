//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde el cliente del mapa de la flota.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::EnvironmentConfig;

/// Crear middleware de CORS según la configuración
pub fn cors_middleware(config: &EnvironmentConfig) -> CorsLayer {
    if config.allows_any_origin() {
        if config.is_production() {
            tracing::warn!("⚠️ CORS abierto a cualquier origen en producción");
        }
        cors_middleware_any()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    }
}

/// CORS abierto a cualquier origen, método y header
pub fn cors_middleware_any() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("⚠️ Origen CORS inválido ignorado: '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
