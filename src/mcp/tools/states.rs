//! MCP tools for workflow State management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::operations::{CREATE_STATE, DELETE_STATE, GET_STATE, LIST_STATES, UPDATE_STATE};
use crate::mcp::server::PlaneMcpServer;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};
use crate::models::{DEFAULT_COLOR, StateGroup};

use super::{map_validation_error, to_body};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListStatesParams {
    #[schemars(description = "The UUID identifier of the project to get states for")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StateIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the state")]
    pub state_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateStateParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "Name of the state")]
    pub name: String,
    #[schemars(
        description = "Group of the state (backlog, unstarted, started, completed, cancelled)"
    )]
    pub group: StateGroup,
    #[schemars(description = "Description of the state (default: empty)")]
    pub description: Option<String>,
    #[schemars(description = "Color hex code for the state (default: #000000)")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStateParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the state")]
    pub state_id: String,
    #[schemars(description = "New name for the state")]
    pub name: Option<String>,
    #[schemars(
        description = "New group for the state (backlog, unstarted, started, completed, cancelled)"
    )]
    pub group: Option<StateGroup>,
    #[schemars(description = "New description for the state")]
    pub description: Option<String>,
    #[schemars(description = "New color hex code for the state")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
struct StateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<StateGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[tool_router(router = state_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all states for a specific project.")]
    pub async fn list_states(
        &self,
        Parameters(params): Parameters<ListStatesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_STATES,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Get details of a specific state.")]
    pub async fn get_state(
        &self,
        Parameters(params): Parameters<StateIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_STATE, &state_args(&params), None).await
    }

    #[tool(description = "Create a new state.")]
    pub async fn create_state(
        &self,
        Parameters(params): Parameters<CreateStateParams>,
    ) -> Result<CallToolResult, McpError> {
        let color = params.color.as_deref().unwrap_or(DEFAULT_COLOR);
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;
        max_chars("color", color, NAME_MAX).map_err(map_validation_error)?;

        let body = to_body(&StateBody {
            name: Some(&params.name),
            group: Some(params.group),
            description: Some(params.description.as_deref().unwrap_or_default()),
            color: Some(color),
        })?;
        self.invoke(
            &CREATE_STATE,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(description = "Update an existing state. Only the fields provided are changed.")]
    pub async fn update_state(
        &self,
        Parameters(params): Parameters<UpdateStateParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;
        optional_max_chars("color", params.color.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;

        let body = to_body(&StateBody {
            name: params.name.as_deref(),
            group: params.group,
            description: params.description.as_deref(),
            color: params.color.as_deref(),
        })?;
        self.invoke(
            &UPDATE_STATE,
            &[
                ("project_id", params.project_id.as_str()),
                ("state_id", params.state_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete a state.")]
    pub async fn delete_state(
        &self,
        Parameters(params): Parameters<StateIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_STATE, &state_args(&params), None).await
    }
}

fn state_args(params: &StateIdParams) -> [(&'static str, &str); 2] {
    [
        ("project_id", params.project_id.as_str()),
        ("state_id", params.state_id.as_str()),
    ]
}
