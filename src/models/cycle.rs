use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::base::{Audit, ExternalLink, IssueCounts, Lifecycle};
use super::validation::{NAME_MAX, Validate, ValidationResult, max_chars};

/// A time-boxed iteration (sprint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub id: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub owned_by: Option<Uuid>,
    #[serde(default)]
    pub view_props: Option<Value>,
    #[serde(default)]
    pub progress_snapshot: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
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

impl Validate for Cycle {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        self.external.validate()
    }
}

/// Membership of one issue in one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleIssue {
    pub id: Uuid,
    pub cycle: Uuid,
    pub issue: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    #[serde(flatten)]
    pub audit: Audit,
}
