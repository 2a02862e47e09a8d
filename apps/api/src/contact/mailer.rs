//! Contact Mailer: hands validated contact submissions to EmailJS, the
//! hosted email relay the portfolio's template lives in.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::contact::validation::ContactForm;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail relay rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Sends a contact submission somewhere a human will read it.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), MailError>;
}

#[derive(Debug, Clone)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_name: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Clone)]
pub struct EmailJsMailer {
    client: Client,
    send_url: String,
    settings: EmailJsSettings,
    recipient_name: String,
}

impl EmailJsMailer {
    pub fn new(
        settings: EmailJsSettings,
        recipient_name: String,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            send_url: EMAILJS_SEND_URL.to_string(),
            settings,
            recipient_name,
        })
    }

    fn request_body<'a>(&'a self, form: &'a ContactForm) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: TemplateParams {
                from_name: form.name.trim(),
                from_email: form.email.trim(),
                subject: form.subject.trim(),
                message: form.message.trim(),
                to_name: &self.recipient_name,
            },
        }
    }
}

#[async_trait]
impl ContactSender for EmailJsMailer {
    async fn send(&self, form: &ContactForm) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.send_url)
            .json(&self.request_body(form))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("EmailJS returned {status}: {message}");
            return Err(MailError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        info!("Contact message from <{}> relayed", form.email.trim());
        Ok(())
    }
}
