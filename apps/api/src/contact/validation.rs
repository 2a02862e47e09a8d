use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field error messages, shown next to each input.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ContactErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Loose address check: something, an `@`, something, a dot, something.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validates a contact submission.
///
/// FAIL conditions:
/// - Any of name, email, subject or message blank
/// - Email not shaped like an address
/// - Message shorter than 10 characters once trimmed
pub fn validate(form: &ContactForm) -> Result<(), ContactErrors> {
    let mut errors = ContactErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("El nombre es requerido".to_string());
    }

    if form.email.trim().is_empty() {
        errors.email = Some("El email es requerido".to_string());
    } else if !is_valid_email(&form.email) {
        errors.email = Some("Email inválido".to_string());
    }

    if form.subject.trim().is_empty() {
        errors.subject = Some("El asunto es requerido".to_string());
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("El mensaje es requerido".to_string());
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some(format!(
            "El mensaje debe tener al menos {MIN_MESSAGE_CHARS} caracteres"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
