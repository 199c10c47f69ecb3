use chrono::{DateTime, NaiveDate, Utc};
use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::base::{Audit, ExternalLink, Lifecycle};
use super::validation::{NAME_MAX, Validate, ValidationResult, max_chars, optional_in_range};

/// Issue priority as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    None,
}

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    pub name: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub description_binary: Option<String>,
    /// Number shown in the readable id, e.g. the 42 in `WEB-42`
    #[serde(default)]
    pub sequence_id: Option<i64>,
    #[serde(default)]
    pub state: Option<Uuid>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignees: Option<Vec<Uuid>>,
    #[serde(default)]
    pub labels: Option<Vec<Uuid>>,
    #[serde(default)]
    pub parent: Option<Uuid>,
    #[serde(default)]
    pub estimate_point: Option<Uuid>,
    #[serde(default)]
    pub point: Option<i64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_draft: Option<bool>,
    #[serde(default)]
    pub type_id: Option<Uuid>,
    #[serde(default)]
    pub sort_order: Option<f64>,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(flatten)]
    pub external: ExternalLink,
}

impl Validate for Issue {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        optional_in_range("point", self.point, 0, 12)?;
        self.external.validate()
    }
}

/// Kind of work item (bug, feature, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: Uuid,
    pub workspace: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_ids: Option<Vec<Uuid>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub logo_props: Value,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(flatten)]
    pub external: ExternalLink,
}

impl Validate for IssueType {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        self.external.validate()
    }
}
