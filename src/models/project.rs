use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::base::{Audit, ExternalLink, Lifecycle};
use super::validation::{
    NAME_MAX, Validate, ValidationResult, charset, max_chars, not_empty, optional_in_range,
    optional_max_chars,
};

pub const IDENTIFIER_MAX: usize = 12;
pub const EMOJI_MAX: usize = 20;

/// A Plane project: the container for issues, cycles, modules, states and
/// labels inside a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub workspace: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Short uppercase key used in readable issue ids such as `WEB-42`
    pub identifier: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub icon_prop: Option<Value>,
    #[serde(default)]
    pub logo_props: Option<Value>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub network: Option<i32>,
    #[serde(default)]
    pub project_lead: Option<Uuid>,
    #[serde(default)]
    pub estimate: Option<Uuid>,
    #[serde(default)]
    pub default_state: Option<Uuid>,
    /// Months until completed issues are archived
    #[serde(default)]
    pub archive_in: Option<i64>,
    /// Months until stale issues are closed
    #[serde(default)]
    pub close_in: Option<i64>,
    #[serde(default)]
    pub sort_order: Option<f64>,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(flatten)]
    pub external: ExternalLink,
}

impl Validate for Project {
    fn validate(&self) -> ValidationResult {
        max_chars("name", &self.name, NAME_MAX)?;
        validate_identifier(&self.identifier)?;
        optional_max_chars("emoji", self.emoji.as_deref(), EMOJI_MAX)?;
        optional_in_range("archive_in", self.archive_in, 0, 12)?;
        optional_in_range("close_in", self.close_in, 0, 12)?;
        self.external.validate()
    }
}

/// Identifiers are stored uppercase without whitespace; `"web app"` becomes
/// `"WEBAPP"`.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// At most 12 characters from `A-Z`, `0-9` and `_`.
pub fn validate_identifier(identifier: &str) -> ValidationResult {
    not_empty("identifier", identifier)?;
    max_chars("identifier", identifier, IDENTIFIER_MAX)?;
    charset(
        "identifier",
        identifier,
        "uppercase letters, digits and underscores",
        |c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_',
    )
}
