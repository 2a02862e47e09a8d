mod backend_client;
mod config;
mod contact;
mod errors;
mod models;
mod profile;
mod routes;
mod skills;
mod state;
mod tech;
mod timeline;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend_client::BackendClient;
use crate::config::Config;
use crate::contact::mailer::{ContactSender, EmailJsMailer};
use crate::routes::build_router;
use crate::skills::catalog::SkillCatalog;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    let source = BackendClient::new(&config.backend_url, timeout)?;
    info!("Backend client initialized ({})", source.base_url());

    let skills = SkillCatalog::load(&config.skills_path)?;
    info!("Skills catalogue loaded: {} entries", skills.skills().len());

    let mailer: Option<Arc<dyn ContactSender>> = match config.emailjs.clone() {
        Some(settings) => {
            let mailer =
                EmailJsMailer::new(settings, config.contact_recipient_name.clone(), timeout)?;
            info!("EmailJS relay initialized");
            Some(Arc::new(mailer))
        }
        None => {
            warn!("EmailJS not configured; contact form submissions will be refused");
            None
        }
    };

    let state = AppState {
        source: Arc::new(source),
        skills: Arc::new(skills),
        mailer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
