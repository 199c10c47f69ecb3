//! MCP tools for Issue management, including comments.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::operations::{
    ADD_ISSUE_COMMENT, CREATE_ISSUE, DELETE_ISSUE, GET_ISSUE, GET_ISSUE_COMMENTS,
    GET_ISSUE_USING_READABLE_IDENTIFIER, LIST_PROJECT_ISSUES, UPDATE_ISSUE,
};
use crate::mcp::server::PlaneMcpServer;
use crate::models::Priority;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};

use super::{map_validation_error, to_body};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectIssuesParams {
    #[schemars(description = "The UUID identifier of the project to get issues for")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue")]
    pub issue_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ReadableIssueParams {
    #[schemars(
        description = "The readable identifier of the project (e.g., 'FIRST' for FIRST-123)"
    )]
    pub project_identifier: String,
    #[schemars(description = "The issue number (e.g., '123' for FIRST-123)")]
    pub issue_identifier: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The title/name of the issue")]
    pub name: String,
    #[schemars(description = "Optional HTML description of the issue")]
    pub description: Option<String>,
    #[schemars(description = "Optional UUID of the issue state")]
    pub state_id: Option<String>,
    #[schemars(description = "Optional priority (urgent, high, medium, low, none)")]
    pub priority: Option<Priority>,
    #[schemars(description = "Optional list of assignee UUIDs")]
    pub assignees: Option<Vec<String>>,
    #[schemars(description = "Optional list of label UUIDs")]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIssueParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue to update")]
    pub issue_id: String,
    #[schemars(description = "Updated issue name")]
    pub name: Option<String>,
    #[schemars(description = "Updated HTML description")]
    pub description: Option<String>,
    #[schemars(description = "Updated state UUID")]
    pub state: Option<String>,
    #[schemars(description = "Updated priority (urgent, high, medium, low, none)")]
    pub priority: Option<Priority>,
    #[schemars(
        description = "Updated list of assignee UUIDs. Replaces the current assignees; an empty list clears them."
    )]
    pub assignees: Option<Vec<String>>,
    #[schemars(
        description = "Updated list of label UUIDs. Replaces the current labels; an empty list clears them."
    )]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddIssueCommentParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue")]
    pub issue_id: String,
    #[schemars(description = "The HTML content of the comment to add")]
    pub comment_html: String,
}

// =============================================================================
// Request Bodies
// =============================================================================

#[derive(Debug, Serialize)]
struct IssueBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description_html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignees: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
}

// =============================================================================
// Issue Tools
// =============================================================================

#[tool_router(router = issue_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(
        description = "Get all issues for a specific project. Returns total_count, count and a summary (id, name, sequence_id, state, priority, timestamps) of each issue."
    )]
    pub async fn list_project_issues(
        &self,
        Parameters(params): Parameters<ListProjectIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_PROJECT_ISSUES,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Get details of a specific issue.")]
    pub async fn get_issue(
        &self,
        Parameters(params): Parameters<IssueIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_ISSUE, &issue_args(&params), None).await
    }

    #[tool(
        description = "Get a specific issue using its readable identifier. When an issue is referred to as FIRST-123, ABC-123, etc., project_identifier is FIRST and issue_identifier is 123."
    )]
    pub async fn get_issue_using_readable_identifier(
        &self,
        Parameters(params): Parameters<ReadableIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &GET_ISSUE_USING_READABLE_IDENTIFIER,
            &[
                ("project_identifier", params.project_identifier.as_str()),
                ("issue_identifier", params.issue_identifier.as_str()),
            ],
            None,
        )
        .await
    }

    #[tool(description = "Create a new issue in a project.")]
    pub async fn create_issue(
        &self,
        Parameters(params): Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;

        let body = to_body(&IssueBody {
            name: Some(&params.name),
            description_html: params.description.as_deref(),
            state: params.state_id.as_deref(),
            priority: params.priority,
            assignees: params.assignees.as_deref(),
            labels: params.labels.as_deref(),
        })?;
        self.invoke(
            &CREATE_ISSUE,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(description = "Update an existing issue. Only the fields provided are changed.")]
    pub async fn update_issue(
        &self,
        Parameters(params): Parameters<UpdateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;

        let body = to_body(&IssueBody {
            name: params.name.as_deref(),
            description_html: params.description.as_deref(),
            state: params.state.as_deref(),
            priority: params.priority,
            assignees: params.assignees.as_deref(),
            labels: params.labels.as_deref(),
        })?;
        self.invoke(
            &UPDATE_ISSUE,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete an issue.")]
    pub async fn delete_issue(
        &self,
        Parameters(params): Parameters<IssueIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_ISSUE, &issue_args(&params), None).await
    }

    #[tool(description = "Get all comments for a specific issue.")]
    pub async fn get_issue_comments(
        &self,
        Parameters(params): Parameters<IssueIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_ISSUE_COMMENTS, &issue_args(&params), None)
            .await
    }

    #[tool(description = "Add a comment to a specific issue.")]
    pub async fn add_issue_comment(
        &self,
        Parameters(params): Parameters<AddIssueCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &ADD_ISSUE_COMMENT,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_id", params.issue_id.as_str()),
            ],
            Some(json!({ "comment_html": params.comment_html })),
        )
        .await
    }
}

fn issue_args(params: &IssueIdParams) -> [(&'static str, &str); 2] {
    [
        ("project_id", params.project_id.as_str()),
        ("issue_id", params.issue_id.as_str()),
    ]
}
