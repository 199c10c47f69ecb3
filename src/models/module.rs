use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::base::{Audit, ExternalLink, IssueCounts, Lifecycle};
use super::validation::{NAME_MAX, Validate, ValidationResult, max_chars};

/// Thematic grouping of issues, independent of time boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_text: Option<Value>,
    #[serde(default)]
    pub description_html: Option<Value>,
    // The API returns either a bare date or a full timestamp here.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub lead: Option<Uuid>,
    #[serde(default)]
    pub members: Vec<Uuid>,
    #[serde(default)]
    pub view_props: Option<Value>,
    #[serde(default)]
    pub links_list: Vec<Value>,
    #[serde(default)]
    pub link_module: Vec<Value>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<f64>,
    #[serde(flatten)]
    pub counts: IssueCounts,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(flatten)]
    pub external: ExternalLink,
}

impl Validate for Module {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        self.external.validate()
    }
}

/// Membership of one issue in one module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleIssue {
    pub id: Uuid,
    pub module: Uuid,
    pub issue: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    #[serde(flatten)]
    pub audit: Audit,
}
