//! MCP tool implementations
//!
//! One module per Plane entity. Each adds an impl block with its own tool
//! router to [`PlaneMcpServer`](super::server::PlaneMcpServer); the server
//! composes them at construction.

use rmcp::ErrorData as McpError;
use serde::Serialize;
use serde_json::{Value, json};

use crate::client::PlaneError;
use crate::models::ValidationError;

mod cycle_issues;
mod cycles;
mod issue_types;
mod issues;
mod labels;
mod module_issues;
mod modules;
mod projects;
mod states;
mod users;
mod worklogs;

#[cfg(test)]
mod cycles_test;
#[cfg(test)]
mod modules_test;

pub use cycle_issues::*;
pub use cycles::*;
pub use issue_types::*;
pub use issues::*;
pub use labels::*;
pub use module_issues::*;
pub use modules::*;
pub use projects::*;
pub use states::*;
pub use worklogs::*;

/// Convert an upstream failure into an MCP tool error.
///
/// 400 becomes invalid-params and 404 resource-not-found; everything else is
/// an internal error. The HTTP status rides along as structured data.
pub(crate) fn map_plane_error(err: PlaneError) -> McpError {
    let data = Some(json!({ "status": err.status() }));
    let message = err.to_string();
    match err {
        PlaneError::BadRequest { .. } => McpError::invalid_params(message, data),
        PlaneError::NotFound { .. } => McpError::resource_not_found(message, data),
        _ => McpError::internal_error(message, data),
    }
}

/// Reject bad input before anything is sent upstream.
pub(crate) fn map_validation_error(err: ValidationError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

/// Serialize a request body; fields left `None` are omitted.
pub(crate) fn to_body<T: Serialize>(body: &T) -> Result<Value, McpError> {
    serde_json::to_value(body)
        .map_err(|e| McpError::internal_error(format!("Unexpected error: {e}"), None))
}
