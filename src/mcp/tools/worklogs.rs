//! MCP tools for time tracking (worklogs).

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::operations::{
    CREATE_WORKLOG, DELETE_WORKLOG, GET_ISSUE_WORKLOGS, GET_TOTAL_WORKLOGS, UPDATE_WORKLOG,
};
use crate::mcp::server::PlaneMcpServer;
use crate::models::validation::non_negative;

use super::{map_validation_error, to_body};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueWorklogsParams {
    #[schemars(description = "The UUID identifier of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue to get worklogs for")]
    pub issue_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TotalWorklogsParams {
    #[schemars(description = "The UUID identifier of the project to get total worklogs for")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateWorklogParams {
    #[schemars(description = "The UUID identifier of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue to create worklog for")]
    pub issue_id: String,
    #[schemars(description = "Duration in hours (e.g., 2.5 for 2 hours 30 minutes)")]
    pub duration: f64,
    #[schemars(description = "Description of the work done")]
    pub description: String,
    #[schemars(description = "Optional timestamp when work started (ISO 8601 format)")]
    pub started_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateWorklogParams {
    #[schemars(description = "The UUID identifier of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue containing the worklog")]
    pub issue_id: String,
    #[schemars(description = "The UUID identifier of the worklog to update")]
    pub worklog_id: String,
    #[schemars(description = "Updated duration in hours")]
    pub duration: Option<f64>,
    #[schemars(description = "Updated description")]
    pub description: Option<String>,
    #[schemars(description = "Updated timestamp when work started")]
    pub started_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteWorklogParams {
    #[schemars(description = "The UUID identifier of the project containing the issue")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue containing the worklog")]
    pub issue_id: String,
    #[schemars(description = "The UUID identifier of the worklog to delete")]
    pub worklog_id: String,
}

#[derive(Debug, Serialize)]
struct WorklogBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<&'a str>,
}

#[tool_router(router = worklog_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all worklogs for a specific issue.")]
    pub async fn get_issue_worklogs(
        &self,
        Parameters(params): Parameters<IssueWorklogsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &GET_ISSUE_WORKLOGS,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
            ],
            None,
        )
        .await
    }

    #[tool(description = "Get total logged time for a project.")]
    pub async fn get_total_worklogs(
        &self,
        Parameters(params): Parameters<TotalWorklogsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &GET_TOTAL_WORKLOGS,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Create a new worklog for an issue.")]
    pub async fn create_worklog(
        &self,
        Parameters(params): Parameters<CreateWorklogParams>,
    ) -> Result<CallToolResult, McpError> {
        non_negative("duration", params.duration).map_err(map_validation_error)?;

        let body = to_body(&WorklogBody {
            duration: Some(params.duration),
            description: Some(&params.description),
            started_at: params.started_at.as_deref(),
        })?;
        self.invoke(
            &CREATE_WORKLOG,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Update an existing worklog. Only the fields provided are changed.")]
    pub async fn update_worklog(
        &self,
        Parameters(params): Parameters<UpdateWorklogParams>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(duration) = params.duration {
            non_negative("duration", duration).map_err(map_validation_error)?;
        }

        let body = to_body(&WorklogBody {
            duration: params.duration,
            description: params.description.as_deref(),
            started_at: params.started_at.as_deref(),
        })?;
        self.invoke(
            &UPDATE_WORKLOG,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
                ("worklog_id", params.worklog_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete a worklog.")]
    pub async fn delete_worklog(
        &self,
        Parameters(params): Parameters<DeleteWorklogParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &DELETE_WORKLOG,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
                ("worklog_id", params.worklog_id.as_str()),
            ],
            None,
        )
        .await
    }
}
