//! Skills catalogue: the skills grid reads a static JSON file rather than
//! the upstream API. Categories, summary statistics and page slicing all live
//! here so the presentation layer only renders.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::models::skill::Skill;

pub const ITEMS_PER_PAGE: usize = 8;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillStats {
    pub total: usize,
    pub categories_count: usize,
    /// Mean proficiency, rounded to the nearest whole percent.
    pub average_level: u32,
    pub max_years: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillPage {
    pub items: Vec<Skill>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based position of the first item shown; 0 when the page is empty.
    pub first_item: usize,
    /// 1-based position of the last item shown.
    pub last_item: usize,
    pub window: Vec<PageMarker>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// Loads the catalogue from a JSON array on disk. A missing file yields an
    /// empty catalogue; a malformed one is a startup error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Skills file {} not found, serving an empty catalogue", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file {}", path.display()))?;
        let skills: Vec<Skill> = serde_json::from_str(&raw)
            .with_context(|| format!("Skills file {} is not a valid skill list", path.display()))?;

        info!("Loaded {} skills from {}", skills.len(), path.display());
        Ok(Self { skills })
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in self.skills.iter().filter_map(|s| s.category.as_deref()) {
            if !category.is_empty() && !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }

    pub fn stats(&self) -> SkillStats {
        let total = self.skills.len();
        let average_level = if total == 0 {
            0
        } else {
            // Levels are not range-checked on load.
            let sum: u64 = self.skills.iter().map(|s| u64::from(s.level)).sum();
            (sum as f64 / total as f64).round() as u32
        };

        SkillStats {
            total,
            categories_count: self.categories().len(),
            average_level,
            max_years: self.skills.iter().map(|s| s.years).max().unwrap_or(0),
        }
    }

    /// Skills in `category`; `None` or `"all"` returns everything.
    pub fn filter(&self, category: Option<&str>) -> Vec<Skill> {
        match category.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => self.skills.clone(),
            Some(wanted) => self
                .skills
                .iter()
                .filter(|s| s.category.as_deref() == Some(wanted))
                .cloned()
                .collect(),
        }
    }
}

/// Slices `items` into fixed-size pages. `page` is 1-based and clamped into
/// range.
pub fn paginate(items: Vec<Skill>, page: usize) -> SkillPage {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(ITEMS_PER_PAGE);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * ITEMS_PER_PAGE;
    let end = (start + ITEMS_PER_PAGE).min(total_items);
    let page_items: Vec<Skill> = items.into_iter().skip(start).take(end - start).collect();

    SkillPage {
        first_item: if page_items.is_empty() { 0 } else { start + 1 },
        last_item: end,
        items: page_items,
        page,
        total_pages,
        total_items,
        window: page_window(page, total_pages),
    }
}

/// Page buttons to show: first, last, the current page and its neighbours,
/// with an ellipsis two steps away from the current page. Empty for a single
/// page.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut window = Vec::new();
    for page in 1..=total_pages {
        let visible = page == 1
            || page == total_pages
            || (page + 1 >= current && page <= current + 1);

        if visible {
            window.push(PageMarker::Page(page));
        } else if page + 2 == current || page == current + 2 {
            window.push(PageMarker::Ellipsis);
        }
    }
    window
}
