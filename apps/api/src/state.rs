use std::sync::Arc;

use crate::backend_client::PortfolioSource;
use crate::contact::mailer::ContactSender;
use crate::skills::catalog::SkillCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream content. Default: `BackendClient` over HTTP.
    pub source: Arc<dyn PortfolioSource>,
    pub skills: Arc<SkillCatalog>,
    /// `None` when EmailJS is not configured; the contact route then refuses
    /// to accept messages.
    pub mailer: Option<Arc<dyn ContactSender>>,
}
