use serde::{Deserialize, Serialize};

/// One work engagement with a single company, as served by the upstream
/// `/experiences/` endpoint.
///
/// Dates stay as the raw upstream strings: parsing is lenient and happens in
/// `timeline::dates` so a malformed value never fails the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExperienceRecord {
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub work_type: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ubication: Option<String>,
}

impl ExperienceRecord {
    /// A record without an end date (absent, null or blank) is still running.
    pub fn is_ongoing(&self) -> bool {
        self.end_date
            .as_deref()
            .map(|d| d.trim().is_empty())
            .unwrap_or(true)
    }

    /// End date with blanks folded into `None`.
    pub fn end_date_str(&self) -> Option<&str> {
        self.end_date.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Work type with blanks folded into `None`.
    pub fn work_type_str(&self) -> Option<&str> {
        self.work_type.as_deref().filter(|w| !w.trim().is_empty())
    }
}

/// All records sharing a company, newest first, plus display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyGroup {
    pub company: String,
    pub projects: Vec<ExperienceRecord>,
    pub total_duration: String,
    pub has_multiple_work_types: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_upstream_shape_and_ignores_unknown_fields() {
        let record: ExperienceRecord = serde_json::from_value(json!({
            "id": 7,
            "company": "Acme",
            "job_title": "Backend Developer",
            "work_type": "Remoto",
            "start_date": "2021-06-01",
            "end_date": null,
            "description": "APIs",
            "technologies": ["Django", "Docker"],
            "ubication": "Madrid"
        }))
        .unwrap();

        assert_eq!(record.company, "Acme");
        assert!(record.is_ongoing());
        assert_eq!(record.technologies, vec!["Django", "Docker"]);
        assert_eq!(record.location, None);
        assert_eq!(record.ubication.as_deref(), Some("Madrid"));
    }

    #[test]
    fn test_blank_end_date_is_ongoing() {
        let record: ExperienceRecord = serde_json::from_value(json!({
            "company": "Acme",
            "start_date": "2021-06-01",
            "end_date": "  "
        }))
        .unwrap();
        assert!(record.is_ongoing());
        assert_eq!(record.end_date_str(), None);
    }

    #[test]
    fn test_company_group_serializes_camel_case() {
        let group = CompanyGroup {
            company: "Acme".to_string(),
            projects: vec![],
            total_duration: "1 año".to_string(),
            has_multiple_work_types: false,
        };
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["totalDuration"], "1 año");
        assert_eq!(value["hasMultipleWorkTypes"], false);
    }
}
