//! Axum route handlers for projects, hero and about content.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{About, Hero};
use crate::models::project::Project;
use crate::profile::highlight::highlight_keywords;
use crate::state::AppState;
use crate::timeline::dates::format_long_date;

#[derive(Debug, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub formatted_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub hero: Option<Hero>,
    pub has_no_data: bool,
}

#[derive(Debug, Deserialize)]
pub struct AboutQuery {
    /// Comma-separated keywords overriding the ones stored upstream.
    pub keywords: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub about: Option<About>,
    /// Description with keyword highlight markup applied.
    pub highlighted: Option<String>,
    pub has_no_data: bool,
}

/// GET /api/v1/projects
pub async fn handle_get_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectView>>, AppError> {
    let projects = state.source.projects().await?;
    let views = projects
        .into_iter()
        .map(|project| ProjectView {
            formatted_date: format_long_date(project.created_at.as_deref()),
            project,
        })
        .collect();
    Ok(Json(views))
}

/// GET /api/v1/hero
pub async fn handle_get_hero(State(state): State<AppState>) -> Result<Json<HeroResponse>, AppError> {
    let hero = state.source.hero().await?;
    Ok(Json(HeroResponse {
        has_no_data: hero.is_none(),
        hero,
    }))
}

/// GET /api/v1/about?keywords=Rust,Django
pub async fn handle_get_about(
    State(state): State<AppState>,
    Query(query): Query<AboutQuery>,
) -> Result<Json<AboutResponse>, AppError> {
    let about = state.source.about().await?;

    let highlighted = about.as_ref().map(|about| {
        let keywords: Vec<String> = match query.keywords.as_deref() {
            Some(raw) => raw.split(',').map(|k| k.trim().to_string()).collect(),
            None => about.keywords.clone(),
        };
        highlight_keywords(&about.description, &keywords)
    });

    Ok(Json(AboutResponse {
        has_no_data: about.is_none(),
        about,
        highlighted,
    }))
}
