//! MCP server implementation
//!
//! [`PlaneMcpServer`] owns the Plane client and the workspace slug. Tool
//! methods live in `super::tools`, one impl block per entity, each with its
//! own router; [`PlaneMcpServer::new`] composes them into one.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::{PlaneClient, PlaneResult};
use crate::config::PlaneConfig;

use super::format;
use super::operations::{Operation, Output};
use super::tools::{map_plane_error, map_validation_error};

/// MCP server exposing the Plane REST API as tools.
#[derive(Clone)]
pub struct PlaneMcpServer {
    client: PlaneClient,
    workspace: Arc<str>,
    tool_router: ToolRouter<Self>,
}

impl PlaneMcpServer {
    /// Create a server that issues every call through `client`, scoped to
    /// `workspace`.
    pub fn new(client: PlaneClient, workspace: impl Into<Arc<str>>) -> Self {
        let tool_router = Self::user_router()
            + Self::project_router()
            + Self::issue_router()
            + Self::module_router()
            + Self::module_issue_router()
            + Self::cycle_router()
            + Self::cycle_issue_router()
            + Self::label_router()
            + Self::state_router()
            + Self::issue_type_router()
            + Self::worklog_router();

        Self {
            client,
            workspace: workspace.into(),
            tool_router,
        }
    }

    /// Build the client from configuration and wrap it in a server.
    pub fn from_config(config: &PlaneConfig) -> PlaneResult<Self> {
        let client = PlaneClient::new(config)?;
        Ok(Self::new(client, config.workspace_slug.as_str()))
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Every tool this server answers to.
    pub fn registered_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Run one operation: fill its path, make exactly one upstream call and
    /// render the result.
    #[instrument(skip_all, fields(tool = op.name))]
    pub(crate) async fn invoke(
        &self,
        op: &Operation,
        args: &[(&'static str, &str)],
        body: Option<Value>,
    ) -> Result<CallToolResult, McpError> {
        let path = op
            .render(&self.workspace, args)
            .map_err(map_validation_error)?;
        debug!(method = %op.method, path, "Invoking Plane operation");

        let text = match op.output {
            Output::Confirm(message) => {
                self.client
                    .execute(op.method, &path, body.as_ref())
                    .await
                    .map_err(map_plane_error)?;
                message.to_string()
            }
            output => {
                let response = self
                    .client
                    .request(op.method, &path, body.as_ref())
                    .await
                    .map_err(map_plane_error)?;
                format::render(output, &response).map_err(|e| {
                    McpError::internal_error(format!("Unexpected error: {e}"), None)
                })?
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PlaneMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(format!(
            "Plane MCP Server v{} - Integration with Plane project management platform",
            env!("CARGO_PKG_VERSION")
        ));
        info
    }
}
