use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Proficiency percentage, 0-100.
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub years: u32,
}
