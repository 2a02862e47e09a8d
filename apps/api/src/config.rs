use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::contact::mailer::EmailJsSettings;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api";

/// Application configuration loaded from environment variables.
/// Everything has a default except the optional EmailJS settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub port: u16,
    pub rust_log: String,
    pub skills_path: PathBuf,
    pub upstream_timeout_secs: u64,
    pub emailjs: Option<EmailJsSettings>,
    pub contact_recipient_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            skills_path: PathBuf::from("data/skills.json"),
            upstream_timeout_secs: 15,
            emailjs: None,
            contact_recipient_name: "Carlos Oliva".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            backend_url: optional_env("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            port: optional_env("PORT")
                .map(|p| p.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            skills_path: optional_env("SKILLS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.skills_path),
            upstream_timeout_secs: optional_env("UPSTREAM_TIMEOUT_SECS")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?
                .unwrap_or(defaults.upstream_timeout_secs),
            emailjs: emailjs_from_env(),
            contact_recipient_name: optional_env("CONTACT_RECIPIENT_NAME")
                .unwrap_or(defaults.contact_recipient_name),
        })
    }
}

/// EmailJS is only usable with all three identifiers present.
fn emailjs_from_env() -> Option<EmailJsSettings> {
    Some(EmailJsSettings {
        service_id: optional_env("EMAILJS_SERVICE_ID")?,
        template_id: optional_env("EMAILJS_TEMPLATE_ID")?,
        public_key: optional_env("EMAILJS_PUBLIC_KEY")?,
    })
}

/// Reads an environment variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
