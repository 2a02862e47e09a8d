use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::contact::validation::{validate, ContactForm};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Validation runs before the relay check so the form gets field errors even
/// when mail is not configured.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate(&form).map_err(AppError::InvalidForm)?;

    let mailer = state.mailer.as_ref().ok_or(AppError::MailNotConfigured)?;
    mailer.send(&form).await?;

    info!("Contact form accepted (subject: {})", form.subject.trim());
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "status": "sent",
            "message": "¡Mensaje enviado con éxito! Te responderé pronto."
        })),
    ))
}
