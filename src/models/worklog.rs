use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::base::Audit;

/// Time logged against an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLog {
    pub id: Uuid,
    pub issue: Uuid,
    pub project: Uuid,
    pub workspace: Uuid,
    #[serde(default)]
    pub user: Option<Uuid>,
    /// Minutes spent
    pub duration: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub logged_at: DateTime<Utc>,
    #[serde(flatten)]
    pub audit: Audit,
}
