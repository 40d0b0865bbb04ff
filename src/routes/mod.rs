//! Rutas HTTP
//!
//! `create_app` arma el router completo con CORS, trazas de requests y
//! respuesta 500 si un handler entra en pánico.

pub mod health_routes;
pub mod vehicle_routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::panic_response;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);

    Router::new()
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .merge(health_routes::create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}
