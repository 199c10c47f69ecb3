//! MCP tools for Project management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::operations::{
    CREATE_PROJECT, DELETE_PROJECT, GET_PROJECT, GET_PROJECTS, UPDATE_PROJECT,
};
use crate::mcp::server::PlaneMcpServer;
use crate::models::validation::{NAME_MAX, max_chars, optional_max_chars};
use crate::models::{normalize_identifier, validate_identifier};

use super::{map_validation_error, to_body};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "The UUID identifier of the project")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "The name of the project")]
    pub name: String,
    #[schemars(
        description = "The identifier of the project (typically 5 uppercase characters). Upper-cased with spaces removed before sending."
    )]
    pub identifier: String,
    #[schemars(description = "Optional project description")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "The UUID identifier of the project to update")]
    pub project_id: String,
    #[schemars(description = "Updated project name")]
    pub name: Option<String>,
    #[schemars(description = "Updated identifier (upper-cased with spaces removed)")]
    pub identifier: Option<String>,
    #[schemars(description = "Updated description")]
    pub description: Option<String>,
    #[schemars(description = "UUID of the new project lead")]
    pub project_lead: Option<String>,
}

// =============================================================================
// Request Bodies
// =============================================================================

#[derive(Debug, Serialize)]
struct ProjectBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_lead: Option<&'a str>,
}

fn checked_identifier(raw: &str) -> Result<String, McpError> {
    let identifier = normalize_identifier(raw);
    validate_identifier(&identifier).map_err(map_validation_error)?;
    Ok(identifier)
}

// =============================================================================
// Project Tools
// =============================================================================

#[tool_router(router = project_router, vis = "pub(crate)")]
impl PlaneMcpServer {
    #[tool(
        description = "Get all projects for the current user. Returns name, id, identifier, description and project_lead for each project."
    )]
    pub async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_PROJECTS, &[], None).await
    }

    #[tool(description = "Get details of a specific project.")]
    pub async fn get_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&GET_PROJECT, &[("project_id", params.project_id.as_str())], None)
            .await
    }

    #[tool(description = "Create a new project.")]
    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        max_chars("name", &params.name, NAME_MAX).map_err(map_validation_error)?;
        let identifier = checked_identifier(&params.identifier)?;

        let body = to_body(&ProjectBody {
            name: Some(&params.name),
            identifier: Some(identifier),
            description: params.description.as_deref(),
            project_lead: None,
        })?;
        self.invoke(&CREATE_PROJECT, &[], Some(body)).await
    }

    #[tool(
        description = "Update an existing project. Only the fields provided are changed."
    )]
    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        optional_max_chars("name", params.name.as_deref(), NAME_MAX)
            .map_err(map_validation_error)?;
        let identifier = params
            .identifier
            .as_deref()
            .map(checked_identifier)
            .transpose()?;

        let body = to_body(&ProjectBody {
            name: params.name.as_deref(),
            identifier,
            description: params.description.as_deref(),
            project_lead: params.project_lead.as_deref(),
        })?;
        self.invoke(
            &UPDATE_PROJECT,
            &[("project_id", params.project_id.as_str())],
            Some(body),
        )
        .await
    }

    #[tool(description = "Delete a project and everything in it.")]
    pub async fn delete_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&DELETE_PROJECT, &[("project_id", params.project_id.as_str())], None)
            .await
    }
}
