use axum::{extract::Path, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::tech::icons::{resolve_badge, TechBadge};

const MAX_BADGES_PER_REQUEST: usize = 200;

#[derive(Debug, Deserialize)]
pub struct BadgesRequest {
    pub names: Vec<String>,
}

/// GET /api/v1/tech/:name
pub async fn handle_get_badge(Path(name): Path<String>) -> Json<TechBadge> {
    Json(resolve_badge(&name))
}

/// POST /api/v1/tech/badges
///
/// Resolves a whole technology list in one call, preserving order.
pub async fn handle_resolve_badges(
    Json(request): Json<BadgesRequest>,
) -> Result<Json<Vec<TechBadge>>, AppError> {
    if request.names.len() > MAX_BADGES_PER_REQUEST {
        return Err(AppError::Validation(format!(
            "At most {MAX_BADGES_PER_REQUEST} names per request"
        )));
    }
    Ok(Json(request.names.iter().map(|n| resolve_badge(n)).collect()))
}
