//! MCP tools for assigning issues to modules.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::operations::{ADD_MODULE_ISSUES, DELETE_MODULE_ISSUE, LIST_MODULE_ISSUES};
use crate::mcp::server::PlaneMcpServer;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListModuleIssuesParams {
    #[schemars(description = "The UUID identifier of the project containing the module")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the module to get issues for")]
    pub module_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddModuleIssuesParams {
    #[schemars(description = "The UUID identifier of the project containing the module")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the module to add issues to")]
    pub module_id: String,
    #[schemars(description = "Array of issue UUIDs to add to the module")]
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RemoveModuleIssueParams {
    #[schemars(description = "The UUID identifier of the project containing the module")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the module containing the issue")]
    pub module_id: String,
    #[schemars(description = "The UUID identifier of the issue to remove from the module")]
    pub issue_id: String,
}

#[tool_router(router = module_issue_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all issues for a specific module.")]
    pub async fn list_module_issues(
        &self,
        Parameters(params): Parameters<ListModuleIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_MODULE_ISSUES,
            &[
                ("project_id", params.project_id.as_str()),
                ("module_id", params.module_id.as_str()),
            ],
            None,
        )
        .await
    }

    #[tool(description = "Add issues to a module. Assign module to issues.")]
    pub async fn add_module_issues(
        &self,
        Parameters(params): Parameters<AddModuleIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &ADD_MODULE_ISSUES,
            &[
                ("project_id", params.project_id.as_str()),
                ("module_id", params.module_id.as_str()),
            ],
            Some(json!({ "issues": params.issues })),
        )
        .await
    }

    #[tool(description = "Remove an issue from a module. Unassign module from issue.")]
    pub async fn delete_module_issue(
        &self,
        Parameters(params): Parameters<RemoveModuleIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &DELETE_MODULE_ISSUE,
            &[
                ("project_id", params.project_id.as_str()),
                ("module_id", params.module_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
            ],
            None,
        )
        .await
    }
}
