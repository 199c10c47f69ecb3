//! Field groups shared by most Plane records.
//!
//! Entity structs embed these with `#[serde(flatten)]`, so on the wire the
//! fields sit at the top level exactly as the API sends them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{NAME_MAX, Validate, ValidationResult, optional_max_chars};

/// Who created or last touched a record, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    #[serde(default)]
    pub updated_by: Option<Uuid>,
}

/// Soft-delete and archive markers. A record is active while neither is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

impl Lifecycle {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        !self.is_deleted() && !self.is_archived()
    }
}

/// Link to a record in a foreign system. Passed through, never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub external_source: Option<String>,
}

impl Validate for ExternalLink {
    fn validate(&self) -> ValidationResult {
        optional_max_chars("external_id", self.external_id.as_deref(), NAME_MAX)?;
        optional_max_chars("external_source", self.external_source.as_deref(), NAME_MAX)
    }
}

/// Issue-count aggregates the API keeps on cycles and modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueCounts {
    #[serde(default)]
    pub total_issues: Option<u32>,
    #[serde(default)]
    pub cancelled_issues: Option<u32>,
    #[serde(default)]
    pub completed_issues: Option<u32>,
    #[serde(default)]
    pub started_issues: Option<u32>,
    #[serde(default)]
    pub unstarted_issues: Option<u32>,
    #[serde(default)]
    pub backlog_issues: Option<u32>,
}
