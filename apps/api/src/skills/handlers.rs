use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::catalog::{paginate, SkillPage, SkillStats, ALL_CATEGORIES};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub category: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub categories: Vec<String>,
    pub active_category: String,
    pub stats: SkillStats,
    pub page: SkillPage,
}

/// GET /api/v1/skills?category=Backend&page=2
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let catalog = &state.skills;
    let active_category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_CATEGORIES)
        .to_string();

    let filtered = catalog.filter(Some(active_category.as_str()));

    Ok(Json(SkillsResponse {
        categories: catalog.categories(),
        stats: catalog.stats(),
        page: paginate(filtered, query.page.unwrap_or(1)),
        active_category,
    }))
}
