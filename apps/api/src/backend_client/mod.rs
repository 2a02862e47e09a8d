//! Backend Client: the single point of entry for calls to the upstream
//! portfolio content API.
//!
//! Handlers never talk to the upstream directly; they go through the
//! `PortfolioSource` trait carried in `AppState`, which `BackendClient`
//! implements over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::experience::ExperienceRecord;
use crate::models::profile::{About, Hero};
use crate::models::project::Project;

const EXPERIENCES_PATH: &str = "/experiences/";
const PROJECTS_PATH: &str = "/projects";
const HERO_PATH: &str = "/hero/";
const ABOUT_PATH: &str = "/about-me/";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where portfolio content comes from. `Arc<dyn PortfolioSource>` lives in
/// `AppState`; tests swap in in-memory implementations.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn experiences(&self) -> Result<Vec<ExperienceRecord>, BackendError>;

    /// Projects, highest id first.
    async fn projects(&self) -> Result<Vec<Project>, BackendError>;

    /// `None` when the upstream has no hero content yet.
    async fn hero(&self) -> Result<Option<Hero>, BackendError>;

    /// `None` when the upstream has no about content yet.
    async fn about(&self) -> Result<Option<About>, BackendError>;
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and decodes the body. Any non-2xx status is an error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        self.get_optional_json(path)
            .await?
            .ok_or_else(|| BackendError::Status {
                status: StatusCode::NOT_FOUND.as_u16(),
                url: self.url(path),
            })
    }

    /// Like `get_json`, but a 404 means "nothing there yet" rather than a failure.
    async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, BackendError> {
        let url = self.url(path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Upstream has no content at {url}");
            return Ok(None);
        }

        if !status.is_success() {
            warn!("Upstream returned {status} for {url}");
            return Err(BackendError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let decoded = serde_json::from_str(&body)?;
        debug!("Fetched {url} ({} bytes)", body.len());
        Ok(Some(decoded))
    }
}

#[async_trait]
impl PortfolioSource for BackendClient {
    async fn experiences(&self) -> Result<Vec<ExperienceRecord>, BackendError> {
        self.get_json(EXPERIENCES_PATH).await
    }

    async fn projects(&self) -> Result<Vec<Project>, BackendError> {
        let mut projects: Vec<Project> = self.get_json(PROJECTS_PATH).await?;
        sort_projects_newest_first(&mut projects);
        Ok(projects)
    }

    async fn hero(&self) -> Result<Option<Hero>, BackendError> {
        match self.get_optional_json::<Value>(HERO_PATH).await? {
            Some(payload) => Ok(hero_from_payload(payload)?),
            None => Ok(None),
        }
    }

    async fn about(&self) -> Result<Option<About>, BackendError> {
        match self.get_optional_json::<Value>(ABOUT_PATH).await? {
            Some(payload) => Ok(about_from_payload(payload)?),
            None => Ok(None),
        }
    }
}

/// Highest id first; ids grow with creation time upstream.
pub fn sort_projects_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.id.cmp(&a.id));
}

/// An empty object, or one without a usable `name`, counts as no hero.
pub fn hero_from_payload(payload: Value) -> Result<Option<Hero>, serde_json::Error> {
    if !has_text_field(&payload, "name") {
        return Ok(None);
    }
    serde_json::from_value(payload).map(Some)
}

/// About content is only usable with a non-blank `description`.
pub fn about_from_payload(payload: Value) -> Result<Option<About>, serde_json::Error> {
    if !has_text_field(&payload, "description") {
        return Ok(None);
    }
    serde_json::from_value(payload).map(Some)
}

fn has_text_field(payload: &Value, field: &str) -> bool {
    payload
        .get(field)
        .and_then(|v| v.as_str())
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}
