use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Landing banner content. Only `name` is required for the banner to render;
/// everything else the upstream sends is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hero {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
