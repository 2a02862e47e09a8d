use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::backend_client::BackendError;
use crate::contact::mailer::MailError;
use crate::contact::validation::ContactErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid contact form")]
    InvalidForm(ContactErrors),

    #[error("Upstream error: {0}")]
    Upstream(#[from] BackendError),

    #[error("Contact mail relay is not configured")]
    MailNotConfigured,

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields: Option<Value> = None;

        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidForm(errors) => {
                fields = serde_json::to_value(errors).ok();
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Por favor corrige los errores del formulario".to_string(),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Upstream error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The content backend could not be reached".to_string(),
                )
            }
            AppError::MailNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "MAIL_NOT_CONFIGURED",
                "Contact messages are not accepted right now".to_string(),
            ),
            AppError::Mail(e) => {
                tracing::error!("Mail error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MAIL_ERROR",
                    "The message could not be sent".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(fields) = fields {
            error["fields"] = fields;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
