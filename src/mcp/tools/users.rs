//! MCP tools for the current user and workspace members.

use rmcp::{ErrorData as McpError, model::CallToolResult, tool, tool_router};

use crate::mcp::operations::{GET_CURRENT_USER, GET_WORKSPACE_MEMBERS};
use crate::mcp::server::PlaneMcpServer;

#[tool_router(router = user_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get information about the current authenticated user.")]
    pub async fn get_current_user(&self) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_CURRENT_USER, &[], None).await
    }

    #[tool(description = "Get all members in the current workspace.")]
    pub async fn get_workspace_members(&self) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_WORKSPACE_MEMBERS, &[], None).await
    }
}
