//! Axum route handlers for the experience timeline.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::experience::{CompanyGroup, ExperienceRecord};
use crate::state::AppState;
use crate::timeline::aggregate::aggregate;
use crate::timeline::dates::{duration_between, format_month_year};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// One engagement as the timeline shows it: the upstream record re-keyed in
/// camelCase plus its display labels.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineProject {
    pub company: String,
    pub job_title: String,
    pub work_type: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub location: Option<String>,
    pub ubication: Option<String>,
    pub formatted_start: String,
    pub formatted_end: String,
    pub ongoing: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGroup {
    pub company: String,
    pub projects: Vec<TimelineProject>,
    pub total_duration: String,
    pub has_multiple_work_types: bool,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub groups: Vec<TimelineGroup>,
    pub total_records: usize,
}

#[derive(Debug, Deserialize)]
pub struct DurationQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DurationResponse {
    pub duration: String,
    pub formatted_start: String,
    pub formatted_end: String,
}

impl From<ExperienceRecord> for TimelineProject {
    fn from(record: ExperienceRecord) -> Self {
        let formatted_start = format_month_year(Some(&record.start_date));
        let formatted_end = format_month_year(record.end_date_str());
        let ongoing = record.is_ongoing();

        TimelineProject {
            end_date: record.end_date_str().map(str::to_string),
            company: record.company,
            job_title: record.job_title,
            work_type: record.work_type,
            start_date: record.start_date,
            description: record.description,
            technologies: record.technologies,
            location: record.location,
            ubication: record.ubication,
            formatted_start,
            formatted_end,
            ongoing,
        }
    }
}

impl From<CompanyGroup> for TimelineGroup {
    fn from(group: CompanyGroup) -> Self {
        let projects = group
            .projects
            .into_iter()
            .map(TimelineProject::from)
            .collect();

        TimelineGroup {
            company: group.company,
            projects,
            total_duration: group.total_duration,
            has_multiple_work_types: group.has_multiple_work_types,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/timeline
///
/// Fetches experiences from the upstream and groups them by company. An
/// upstream failure is returned as-is; nothing is aggregated in that case.
pub async fn handle_get_timeline(
    State(state): State<AppState>,
) -> Result<Json<TimelineResponse>, AppError> {
    let records = state.source.experiences().await?;
    let total_records = records.len();

    let groups = aggregate(records);
    info!(
        "Timeline built: {} records across {} companies",
        total_records,
        groups.len()
    );

    Ok(Json(TimelineResponse {
        groups: groups.into_iter().map(TimelineGroup::from).collect(),
        total_records,
    }))
}

/// GET /api/v1/duration?start=YYYY-MM-DD&end=YYYY-MM-DD
///
/// Span label for an arbitrary range; a missing `end` means today.
pub async fn handle_get_duration(
    Query(query): Query<DurationQuery>,
) -> Result<Json<DurationResponse>, AppError> {
    let start = match query.start.as_deref().map(str::trim) {
        Some(start) if !start.is_empty() => start,
        _ => return Err(AppError::Validation("start is required".to_string())),
    };

    let end = query.end.as_deref();
    Ok(Json(DurationResponse {
        duration: duration_between(start, end, Utc::now().date_naive()),
        formatted_start: format_month_year(Some(start)),
        formatted_end: format_month_year(end),
    }))
}
