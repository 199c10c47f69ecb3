//! Per-project vocabulary: workflow states and labels.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::base::{Audit, ExternalLink, Lifecycle};
use super::validation::{
    NAME_MAX, Validate, ValidationResult, charset, max_chars, optional_max_chars,
};

pub const SLUG_MAX: usize = 100;
pub const DEFAULT_COLOR: &str = "#000000";

/// Bucket a workflow state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StateGroup {
    Backlog,
    Unstarted,
    Started,
    Completed,
    Cancelled,
}

/// A workflow status an issue can be in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub sequence: Option<f64>,
    #[serde(default)]
    pub group: Option<StateGroup>,
    #[serde(default)]
    pub default: Option<bool>,
    #[serde(default)]
    pub is_triage: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<f64>,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(flatten)]
    pub external: ExternalLink,
}

impl Validate for State {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        max_chars("color", &self.color, NAME_MAX)?;
        if let Some(slug) = &self.slug {
            max_chars("slug", slug, SLUG_MAX)?;
            charset("slug", slug, "letters, digits, '-' and '_'", |c| {
                c.is_ascii_alphanumeric() || c == '-' || c == '_'
            })?;
        }
        self.external.validate()
    }
}

/// Tag for categorizing issues; labels may nest under a parent label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: Uuid,
    pub workspace: Uuid,
    pub project: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub parent: Option<Uuid>,
    #[serde(default)]
    pub sort_order: Option<f64>,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(flatten)]
    pub external: ExternalLink,
}

impl Validate for Label {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        optional_max_chars("color", self.color.as_deref(), NAME_MAX)?;
        self.external.validate()
    }
}
