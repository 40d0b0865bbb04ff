//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la API y su conversión a respuestas HTTP.
//! El cuerpo de error siempre tiene la forma `{"detail": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::any::Any;
use thiserror::Error;

use crate::repositories::vehicle_registry::RegistryError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    detail: Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation { field, message } => {
                tracing::warn!("Validation error: {}", message);
                let loc = match field {
                    Some(field) => json!(["body", field]),
                    None => json!(["body"]),
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        detail: json!([{
                            "loc": loc,
                            "msg": message,
                            "type": "value_error"
                        }]),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        detail: json!(msg),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        detail: json!("Internal server error"),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ProviderNotFound { .. } => {
                AppError::NotFound("Provider not found".to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Respuesta 500 para un handler que entró en pánico (usado por `CatchPanicLayer`)
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panic: {}", msg)).into_response()
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: Option<&str>, message: &str) -> AppError {
    AppError::Validation {
        field: field.map(str::to_string),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_provider_not_found_maps_to_404() {
        let err: AppError = RegistryError::ProviderNotFound {
            provider_name: "Nonexistent Co".to_string(),
        }
        .into();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "detail": "Provider not found" }));
    }

    #[tokio::test]
    async fn test_validation_error_has_field_location() {
        let response = validation_error(Some("status"), "missing field `status`").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["detail"][0]["loc"], json!(["body", "status"]));
        assert_eq!(body["detail"][0]["msg"], "missing field `status`");
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500() {
        use axum::{body::Body, http::Request, routing::get, Router};
        use tower::ServiceExt;
        use tower_http::catch_panic::CatchPanicLayer;

        async fn boom() -> &'static str {
            panic!("registro corrupto")
        }

        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(panic_response));

        let response = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Internal server error" })
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let err: AppError = RegistryError::DuplicateId("TOW-001".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "detail": "Internal server error" }));
    }
}
