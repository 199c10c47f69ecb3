//! MCP tools for Label management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::operations::{CREATE_LABEL, DELETE_LABEL, GET_LABEL, LIST_LABELS, UPDATE_LABEL};
use crate::mcp::server::PlaneMcpServer;
use crate::models::DEFAULT_COLOR;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};

use super::{map_validation_error, to_body};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListLabelsParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the label")]
    pub label_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "Name of the label")]
    pub name: String,
    #[schemars(description = "Description of the label (default: empty)")]
    pub description: Option<String>,
    #[schemars(description = "Color hex code for the label (default: #000000)")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the label")]
    pub label_id: String,
    #[schemars(description = "New name for the label")]
    pub name: Option<String>,
    #[schemars(description = "New description for the label")]
    pub description: Option<String>,
    #[schemars(description = "New color hex code for the label")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
struct LabelBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[tool_router(router = label_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "List all labels for a project.")]
    pub async fn list_labels(
        &self,
        Parameters(params): Parameters<ListLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_LABELS,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Get details of a specific label.")]
    pub async fn get_label(
        &self,
        Parameters(params): Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_LABEL, &label_args(&params), None).await
    }

    #[tool(description = "Create a new label.")]
    pub async fn create_label(
        &self,
        Parameters(params): Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let color = params.color.as_deref().unwrap_or(DEFAULT_COLOR);
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;
        max_chars("color", color, NAME_MAX).map_err(map_validation_error)?;

        let body = to_body(&LabelBody {
            name: Some(&params.name),
            description: Some(params.description.as_deref().unwrap_or_default()),
            color: Some(color),
        })?;
        self.invoke(
            &CREATE_LABEL,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(description = "Update an existing label. Only the fields provided are changed.")]
    pub async fn update_label(
        &self,
        Parameters(params): Parameters<UpdateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;
        optional_max_chars("color", params.color.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;

        let body = to_body(&LabelBody {
            name: params.name.as_deref(),
            description: params.description.as_deref(),
            color: params.color.as_deref(),
        })?;
        self.invoke(
            &UPDATE_LABEL,
            &[
                ("project_id", params.project_id.as_str()),
                ("label_id", params.label_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete a label.")]
    pub async fn delete_label(
        &self,
        Parameters(params): Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_LABEL, &label_args(&params), None).await
    }
}

fn label_args(params: &LabelIdParams) -> [(&'static str, &str); 2] {
    [
        ("project_id", params.project_id.as_str()),
        ("label_id", params.label_id.as_str()),
    ]
}
