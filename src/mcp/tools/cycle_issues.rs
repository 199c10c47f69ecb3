//! MCP tools for assigning issues to cycles.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::operations::{ADD_CYCLE_ISSUES, DELETE_CYCLE_ISSUE, LIST_CYCLE_ISSUES};
use crate::mcp::server::PlaneMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCycleIssuesParams {
    #[schemars(description = "The UUID identifier of the project containing the cycle")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the cycle to get issues for")]
    pub cycle_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCycleIssuesParams {
    #[schemars(description = "The UUID identifier of the project containing the cycle")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the cycle to add issues to")]
    pub cycle_id: String,
    #[schemars(description = "Array of issue UUIDs to add to the cycle")]
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RemoveCycleIssueParams {
    #[schemars(description = "The UUID identifier of the project containing the cycle")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the cycle containing the issue")]
    pub cycle_id: String,
    #[schemars(description = "The UUID identifier of the issue to remove from the cycle")]
    pub issue_id: String,
}

#[tool_router(router = cycle_issue_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all issues in a specific cycle.")]
    pub async fn list_cycle_issues(
        &self,
        Parameters(params): Parameters<ListCycleIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_CYCLE_ISSUES,
            &[
                ("project_id", params.project_id.as_str()),
                ("cycle_id", params.cycle_id.as_str()),
            ],
            None,
        )
        .await
    }

    #[tool(description = "Add issues to a cycle.")]
    pub async fn add_cycle_issues(
        &self,
        Parameters(params): Parameters<AddCycleIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &ADD_CYCLE_ISSUES,
            &[
                ("project_id", params.project_id.as_str()),
                ("cycle_id", params.cycle_id.as_str()),
            ],
            Some(json!({ "issues": params.issues })),
        )
        .await
    }

    #[tool(description = "Remove an issue from a cycle.")]
    pub async fn delete_cycle_issue(
        &self,
        Parameters(params): Parameters<RemoveCycleIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &DELETE_CYCLE_ISSUE,
            &[
                ("project_id", params.project_id.as_str()),
                ("cycle_id", params.cycle_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
            ],
            None,
        )
        .await
    }
}
