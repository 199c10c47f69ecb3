//! MCP tools for Module management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::operations::{
    CREATE_MODULE, DELETE_MODULE, GET_MODULE, LIST_MODULES, UPDATE_MODULE,
};
use crate::mcp::server::PlaneMcpServer;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};

use super::{map_validation_error, to_body};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListModulesParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ModuleIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the module")]
    pub module_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateModuleParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The name of the module")]
    pub name: String,
    #[schemars(description = "Optional module description")]
    pub description: Option<String>,
    #[schemars(description = "Optional start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Optional target/end date (YYYY-MM-DD)")]
    pub target_date: Option<String>,
    #[schemars(description = "Optional UUID of the module lead")]
    pub lead: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateModuleParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
    #[schemars(description = "The UUID identifier of the module")]
    pub module_id: String,
    #[schemars(description = "Updated module name")]
    pub name: Option<String>,
    #[schemars(description = "Updated description")]
    pub description: Option<String>,
    #[schemars(description = "Updated start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[schemars(description = "Updated target date (YYYY-MM-DD)")]
    pub target_date: Option<String>,
    #[schemars(description = "Updated lead UUID")]
    pub lead: Option<String>,
    #[schemars(
        description = "Updated status (backlog, planned, in-progress, paused, completed, cancelled)"
    )]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct ModuleBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lead: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
}

// =============================================================================
// Module Tools
// =============================================================================

#[tool_router(router = module_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(description = "Get all modules for a specific project.")]
    pub async fn list_modules(
        &self,
        Parameters(params): Parameters<ListModulesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(
            &LIST_MODULES,
            &[("project_id", params.project_id.as_str())],
            None,
        )
        .await
    }

    #[tool(description = "Get details of a specific module.")]
    pub async fn get_module(
        &self,
        Parameters(params): Parameters<ModuleIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_MODULE, &module_args(&params), None).await
    }

    #[tool(description = "Create a new module in a project.")]
    pub async fn create_module(
        &self,
        Parameters(params): Parameters<CreateModuleParams>,
    ) -> Result<CallToolResult, McpError> {
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;

        let body = to_body(&ModuleBody {
            name: Some(&params.name),
            description: params.description.as_deref(),
            start_date: params.start_date.as_deref(),
            target_date: params.target_date.as_deref(),
            lead: params.lead.as_deref(),
            status: None,
        })?;
        self.invoke(
            &CREATE_MODULE,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(description = "Update an existing module. Only the fields provided are changed.")]
    pub async fn update_module(
        &self,
        Parameters(params): Parameters<UpdateModuleParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;

        let body = to_body(&ModuleBody {
            name: params.name.as_deref(),
            description: params.description.as_deref(),
            start_date: params.start_date.as_deref(),
            target_date: params.target_date.as_deref(),
            lead: params.lead.as_deref(),
            status: params.status.as_deref(),
        })?;
        self.invoke(
            &UPDATE_MODULE,
            &[
                ("project_id", params.project_id.as_str()),
                ("module_id", params.module_id.as_str()),
            ],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete a module.")]
    pub async fn delete_module(
        &self,
        Parameters(params): Parameters<ModuleIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_MODULE, &module_args(&params), None).await
    }
}

fn module_args(params: &ModuleIdParams) -> [(&'static str, &str); 2] {
    [
        ("project_id", params.project_id.as_str()),
        ("module_id", params.module_id.as_str()),
    ]
}
