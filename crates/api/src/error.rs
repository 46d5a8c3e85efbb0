use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use lumina_core::error::CoreError;
use lumina_genai::GenAiError;
use lumina_studio::StudioError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StudioError`] and implements [`IntoResponse`] to produce
/// consistent `{ "error": ..., "code": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Studio(#[from] StudioError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Studio(StudioError::Core(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Studio(studio) => classify_studio_error(studio),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a studio error to an HTTP status, error code, and message.
///
/// Generative failures are upstream problems and map to 502/503; validation
/// failures of the response shape fold into `SERVICE_UNAVAILABLE` for user
/// messaging, per the error-taxonomy design.
fn classify_studio_error(err: &StudioError) -> (StatusCode, &'static str, String) {
    match err {
        StudioError::Core(core) => match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        StudioError::GenAi(genai) => {
            let status = match genai {
                GenAiError::QuotaExceeded => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, genai.code(), genai.to_string())
        }
        StudioError::Snapshot(e) => {
            tracing::error!(error = %e, "Failed to persist draft snapshot");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PERSISTENCE_ERROR",
                "Failed to persist the draft library".to_string(),
            )
        }
    }
}
