//! MCP tools for Issue Type management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::operations::{
    CREATE_ISSUE_TYPE, DELETE_ISSUE_TYPE, GET_ISSUE_TYPE, LIST_ISSUE_TYPES, UPDATE_ISSUE_TYPE,
};
use crate::mcp::server::PlaneMcpServer;
use crate::models::DEFAULT_COLOR;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};

use super::{map_validation_error, to_body};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIssueTypesParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueTypeIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue type")]
    pub issue_type_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueTypeParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "Name of the issue type")]
    pub name: String,
    #[schemars(description = "Description of the issue type (default: empty)")]
    pub description: Option<String>,
    #[schemars(description = "Color hex code for the issue type (default: #000000)")]
    pub color: Option<String>,
    #[schemars(description = "Icon identifier for the issue type (default: empty)")]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIssueTypeParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the issue type")]
    pub issue_type_id: String,
    #[schemars(description = "New name for the issue type")]
    pub name: Option<String>,
    #[schemars(description = "New description for the issue type")]
    pub description: Option<String>,
    #[schemars(description = "New color hex code for the issue type")]
    pub color: Option<String>,
    #[schemars(description = "New icon identifier for the issue type")]
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
struct IssueTypeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
}

#[tool_router(router = issue_type_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all issue types for a specific project.")]
    pub async fn list_issue_types(
        &self,
        Parameters(params): Parameters<ListIssueTypesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_ISSUE_TYPES,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Get details of a specific issue type.")]
    pub async fn get_issue_type(
        &self,
        Parameters(params): Parameters<IssueTypeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_ISSUE_TYPE, &issue_type_args(&params), None)
            .await
    }

    #[tool(description = "Create a new issue type.")]
    pub async fn create_issue_type(
        &self,
        Parameters(params): Parameters<CreateIssueTypeParams>,
    ) -> Result<CallToolResult, McpError> {
        let color = params.color.as_deref().unwrap_or(DEFAULT_COLOR);
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;
        max_chars("color", color, NAME_MAX).map_err(map_validation_error)?;

        let body = to_body(&IssueTypeBody {
            name: Some(&params.name),
            description: Some(params.description.as_deref().unwrap_or_default()),
            color: Some(color),
            icon: Some(params.icon.as_deref().unwrap_or_default()),
        })?;
        self.invoke(
            &CREATE_ISSUE_TYPE,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(
        description = "Update an existing issue type. Only the fields provided are changed."
    )]
    pub async fn update_issue_type(
        &self,
        Parameters(params): Parameters<UpdateIssueTypeParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;
        optional_max_chars("color", params.color.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;

        let body = to_body(&IssueTypeBody {
            name: params.name.as_deref(),
            description: params.description.as_deref(),
            color: params.color.as_deref(),
            icon: params.icon.as_deref(),
        })?;
        self.invoke(
            &UPDATE_ISSUE_TYPE,
            &[
                ("project_id", params.project_id.as_str()),
                ("issue_type_id", params.issue_type_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete an issue type.")]
    pub async fn delete_issue_type(
        &self,
        Parameters(params): Parameters<IssueTypeIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_ISSUE_TYPE, &issue_type_args(&params), None)
            .await
    }
}

fn issue_type_args(params: &IssueTypeIdParams) -> [(&'static str, &str); 2] {
    [
        ("project_id", params.project_id.as_str()),
        ("issue_type_id", params.issue_type_id.as_str()),
    ]
}
