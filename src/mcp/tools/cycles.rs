//! MCP tools for Cycle (sprint) management.

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
    CREATE_CYCLE, DELETE_CYCLE, GET_CYCLE, LIST_CYCLES, TRANSFER_CYCLE_ISSUES, UPDATE_CYCLE,
};
use crate::mcp::server::PlaneMcpServer;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};

use super::{map_validation_error, to_body};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCyclesParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CycleIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the cycle")]
    pub cycle_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCycleParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The name of the cycle")]
    pub name: String,
    #[schemars(description = "Optional cycle description")]
    pub description: Option<String>,
    #[schemars(description = "Optional start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Optional end date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCycleParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the cycle")]
    pub cycle_id: String,
    #[schemars(description = "Updated cycle name")]
    pub name: Option<String>,
    #[schemars(description = "Updated description")]
    pub description: Option<String>,
    #[schemars(description = "Updated start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Updated end date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TransferCycleIssuesParams {
    #[schemars(description = "The UUID identifier of the project containing the cycle")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the source cycle")]
    pub cycle_id: String,
    #[schemars(description = "The UUID identifier of the target cycle")]
    pub new_cycle_id: String,
}

#[derive(Debug, Serialize)]
struct CycleBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<&'a str>,
}

// =============================================================================
// Cycle Tools
// =============================================================================

#[tool_router(router = cycle_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all cycles for a specific project.")]
    pub async fn list_cycles(
        &self,
        Parameters(params): Parameters<ListCyclesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_CYCLES,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Get details of a specific cycle.")]
    pub async fn get_cycle(
        &self,
        Parameters(params): Parameters<CycleIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_CYCLE, &cycle_args(&params), None).await
    }

    #[tool(description = "Create a new cycle in a project.")]
    pub async fn create_cycle(
        &self,
        Parameters(params): Parameters<CreateCycleParams>,
    ) -> Result<CallToolResult, McpError> {
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;

        let body = to_body(&CycleBody {
            name: Some(&params.name),
            description: params.description.as_deref(),
            start_date: params.start_date.as_deref(),
            end_date: params.end_date.as_deref(),
        })?;
        self.invoke(
            &CREATE_CYCLE,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(description = "Update an existing cycle. Only the fields provided are changed.")]
    pub async fn update_cycle(
        &self,
        Parameters(params): Parameters<UpdateCycleParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;

        let body = to_body(&CycleBody {
            name: params.name.as_deref(),
            description: params.description.as_deref(),
            start_date: params.start_date.as_deref(),
            end_date: params.end_date.as_deref(),
        })?;
        self.invoke(
            &UPDATE_CYCLE,
            &[
                ("project_id", params.project_id.as_str()),
                ("cycle_id", params.cycle_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete a cycle.")]
    pub async fn delete_cycle(
        &self,
        Parameters(params): Parameters<CycleIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_CYCLE, &cycle_args(&params), None).await
    }

    #[tool(description = "Transfer issues from one cycle to another.")]
    pub async fn transfer_cycle_issues(
        &self,
        Parameters(params): Parameters<TransferCycleIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &TRANSFER_CYCLE_ISSUES,
            &[
                ("project_id", params.project_id.as_str()),
                ("cycle_id", params.cycle_id.as_str()),
            ],
            Some(json!({ "new_cycle_id": params.new_cycle_id })),
        )
        .await
    }
}

fn cycle_args(params: &CycleIdParams) -> [(&'static str, &str); 2] {
    [
        ("project_id", params.project_id.as_str()),
        ("cycle_id", params.cycle_id.as_str()),
    ]
}
