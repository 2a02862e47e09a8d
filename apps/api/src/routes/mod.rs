pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::profile::handlers as profile;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::tech::handlers as tech;
use crate::timeline::handlers as timeline;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Experience timeline
        .route("/api/v1/timeline", get(timeline::handle_get_timeline))
        .route("/api/v1/duration", get(timeline::handle_get_duration))
        // Profile content
        .route("/api/v1/projects", get(profile::handle_get_projects))
        .route("/api/v1/hero", get(profile::handle_get_hero))
        .route("/api/v1/about", get(profile::handle_get_about))
        // Skills grid
        .route("/api/v1/skills", get(skills::handle_get_skills))
        // Technology badges
        .route("/api/v1/tech/badges", post(tech::handle_resolve_badges))
        .route("/api/v1/tech/:name", get(tech::handle_get_badge))
        // Contact form
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}
