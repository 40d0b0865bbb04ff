//! Validación de cuerpos JSON
//!
//! Extractor `ValidatedJson` que convierte los rechazos de `axum::Json` en
//! `AppError::Validation` con el campo afectado cuando se puede determinar.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::errors::{validation_error, AppError};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Igual que `Json<T>` pero con errores 422 en el formato `{"detail": [...]}`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => {
            let field = field_from_message(&message);
            validation_error(field.as_deref(), &message)
        }
        _ => validation_error(None, &message),
    }
}

/// Extraer el nombre del campo de un mensaje de serde
///
/// Formatos reconocidos: "missing field `status`" y "providerName: invalid type ...".
fn field_from_message(message: &str) -> Option<String> {
    if let Some(start) = message.find("missing field `") {
        let rest = &message[start + "missing field `".len()..];
        return rest.find('`').map(|end| rest[..end].to_string());
    }

    let detail = message.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(message);
    let (path, _) = detail.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']');

    is_path.then(|| path.to_string())
}
