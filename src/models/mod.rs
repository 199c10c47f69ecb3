//! Record types mirroring the Plane API's JSON.
//!
//! Tools pass upstream JSON through untouched; these types document the
//! payload shapes and carry the field-level constraints ([`Validate`]) the
//! tools check before sending a create or update.

pub mod base;
pub mod cycle;
pub mod issue;
pub mod metadata;
pub mod module;
pub mod project;
pub mod validation;
pub mod worklog;

#[cfg(test)]
mod models_test;

pub use base::{Audit, ExternalLink, IssueCounts, Lifecycle};
pub use cycle::{Cycle, CycleIssue};
pub use issue::{Issue, IssueType, Priority};
pub use metadata::{DEFAULT_COLOR, Label, State, StateGroup};
pub use module::{Module, ModuleIssue};
pub use project::{Project, normalize_identifier, validate_identifier};
pub use validation::{Validate, ValidationError, ValidationResult};
pub use worklog::WorkLog;
