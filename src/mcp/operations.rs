//! Static table of every Plane operation exposed as an MCP tool.
//!
//! Each entry fixes the HTTP method, the path template (relative to
//! `api/v1/`) and how the response is turned into tool output. Tool methods
//! only fill in the template and, for writes, supply a body.

use crate::client::Method;
use crate::models::validation::{ValidationError, not_empty};

/// How a successful response becomes tool output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Upstream JSON, pretty-printed
    Json,
    /// Five-field summary of each project
    ProjectSummary,
    /// Seven-field summary of each issue plus counts
    IssueSummary,
    /// Fixed message; the response body is never read
    Confirm(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub output: Output,
}

impl Operation {
    /// Fill the path template in one pass. `{workspace}` comes from
    /// configuration, every other `{placeholder}` from `args`. Each value is
    /// percent-encoded into a single path segment, so it can neither reach
    /// another endpoint nor be substituted again.
    pub fn render(
        &self,
        workspace: &str,
        args: &[(&'static str, &str)],
    ) -> Result<String, ValidationError> {
        let mut path = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|len| open + len) else {
                break;
            };
            path.push_str(&rest[..open]);

            let name = &rest[open + 1..close];
            let value = if name == "workspace" {
                Some(("workspace", workspace))
            } else {
                args.iter().find(|(arg, _)| *arg == name).copied()
            };
            match value {
                Some((field, value)) => path.push_str(&segment(field, value)?),
                None => path.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }
}

fn segment(field: &'static str, value: &str) -> Result<String, ValidationError> {
    not_empty(field, value)?;
    // URL parsers resolve these even when percent-encoded
    if value == "." || value == ".." {
        return Err(ValidationError::InvalidCharacters {
            field,
            allowed: "an identifier other than '.' or '..'",
            value: value.to_string(),
        });
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Declare one constant per operation plus the [`ALL`] slice.
macro_rules! operations {
    ($($konst:ident $name:literal => $method:ident $path:literal => $output:expr),* $(,)?) => {
        $(
            pub const $konst: Operation = Operation {
                name: $name,
                method: Method::$method,
                path: $path,
                output: $output,
            };
        )*

        /// Every operation, in registration order.
        pub const ALL: &[Operation] = &[$($konst),*];
    };
}

use Output::{Confirm, IssueSummary, Json, ProjectSummary};

operations! {
    GET_CURRENT_USER "get_current_user" => Get "users/me/" => Json,
    GET_WORKSPACE_MEMBERS "get_workspace_members" => Get "workspaces/{workspace}/members/" => Json,

    GET_PROJECTS "get_projects" => Get "workspaces/{workspace}/projects/" => ProjectSummary,
    GET_PROJECT "get_project" => Get "workspaces/{workspace}/projects/{project_id}/" => Json,
    CREATE_PROJECT "create_project" => Post "workspaces/{workspace}/projects/" => Json,
    UPDATE_PROJECT "update_project" => Patch "workspaces/{workspace}/projects/{project_id}/" => Json,
    DELETE_PROJECT "delete_project" => Delete "workspaces/{workspace}/projects/{project_id}/"
        => Confirm("Project deleted successfully"),

    LIST_PROJECT_ISSUES "list_project_issues" => Get "workspaces/{workspace}/projects/{project_id}/issues/" => IssueSummary,
    GET_ISSUE "get_issue" => Get "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/" => Json,
    GET_ISSUE_USING_READABLE_IDENTIFIER "get_issue_using_readable_identifier" => Get
        "workspaces/{workspace}/issues/{project_identifier}-{issue_identifier}/" => Json,
    CREATE_ISSUE "create_issue" => Post "workspaces/{workspace}/projects/{project_id}/issues/" => Json,
    UPDATE_ISSUE "update_issue" => Patch "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/" => Json,
    DELETE_ISSUE "delete_issue" => Delete "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/"
        => Confirm("Issue deleted successfully"),
    GET_ISSUE_COMMENTS "get_issue_comments" => Get
        "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/comments/" => Json,
    ADD_ISSUE_COMMENT "add_issue_comment" => Post
        "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/comments/" => Json,

    LIST_MODULES "list_modules" => Get "workspaces/{workspace}/projects/{project_id}/modules/" => Json,
    GET_MODULE "get_module" => Get "workspaces/{workspace}/projects/{project_id}/modules/{module_id}/" => Json,
    CREATE_MODULE "create_module" => Post "workspaces/{workspace}/projects/{project_id}/modules/" => Json,
    UPDATE_MODULE "update_module" => Patch "workspaces/{workspace}/projects/{project_id}/modules/{module_id}/" => Json,
    DELETE_MODULE "delete_module" => Delete "workspaces/{workspace}/projects/{project_id}/modules/{module_id}/"
        => Confirm("Module deleted successfully"),

    LIST_MODULE_ISSUES "list_module_issues" => Get
        "workspaces/{workspace}/projects/{project_id}/modules/{module_id}/module-issues/" => Json,
    ADD_MODULE_ISSUES "add_module_issues" => Post
        "workspaces/{workspace}/projects/{project_id}/modules/{module_id}/module-issues/" => Json,
    DELETE_MODULE_ISSUE "delete_module_issue" => Delete
        "workspaces/{workspace}/projects/{project_id}/modules/{module_id}/module-issues/{issue_id}/"
        => Confirm("Issue removed from module successfully"),

    LIST_CYCLES "list_cycles" => Get "workspaces/{workspace}/projects/{project_id}/cycles/" => Json,
    GET_CYCLE "get_cycle" => Get "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/" => Json,
    CREATE_CYCLE "create_cycle" => Post "workspaces/{workspace}/projects/{project_id}/cycles/" => Json,
    UPDATE_CYCLE "update_cycle" => Patch "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/" => Json,
    DELETE_CYCLE "delete_cycle" => Delete "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/"
        => Confirm("Cycle deleted successfully"),
    TRANSFER_CYCLE_ISSUES "transfer_cycle_issues" => Post
        "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/transfer-issues/" => Json,

    LIST_CYCLE_ISSUES "list_cycle_issues" => Get
        "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/cycle-issues/" => Json,
    ADD_CYCLE_ISSUES "add_cycle_issues" => Post
        "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/cycle-issues/" => Json,
    DELETE_CYCLE_ISSUE "delete_cycle_issue" => Delete
        "workspaces/{workspace}/projects/{project_id}/cycles/{cycle_id}/cycle-issues/{issue_id}/"
        => Confirm("Issue removed from cycle successfully"),

    LIST_LABELS "list_labels" => Get "workspaces/{workspace}/projects/{project_id}/labels/" => Json,
    GET_LABEL "get_label" => Get "workspaces/{workspace}/projects/{project_id}/labels/{label_id}/" => Json,
    CREATE_LABEL "create_label" => Post "workspaces/{workspace}/projects/{project_id}/labels/" => Json,
    UPDATE_LABEL "update_label" => Patch "workspaces/{workspace}/projects/{project_id}/labels/{label_id}/" => Json,
    DELETE_LABEL "delete_label" => Delete "workspaces/{workspace}/projects/{project_id}/labels/{label_id}/"
        => Confirm("Label deleted successfully"),

    LIST_STATES "list_states" => Get "workspaces/{workspace}/projects/{project_id}/states/" => Json,
    GET_STATE "get_state" => Get "workspaces/{workspace}/projects/{project_id}/states/{state_id}/" => Json,
    CREATE_STATE "create_state" => Post "workspaces/{workspace}/projects/{project_id}/states/" => Json,
    UPDATE_STATE "update_state" => Patch "workspaces/{workspace}/projects/{project_id}/states/{state_id}/" => Json,
    DELETE_STATE "delete_state" => Delete "workspaces/{workspace}/projects/{project_id}/states/{state_id}/"
        => Confirm("State deleted successfully"),

    LIST_ISSUE_TYPES "list_issue_types" => Get "workspaces/{workspace}/projects/{project_id}/issue-types/" => Json,
    GET_ISSUE_TYPE "get_issue_type" => Get
        "workspaces/{workspace}/projects/{project_id}/issue-types/{issue_type_id}/" => Json,
    CREATE_ISSUE_TYPE "create_issue_type" => Post "workspaces/{workspace}/projects/{project_id}/issue-types/" => Json,
    UPDATE_ISSUE_TYPE "update_issue_type" => Patch
        "workspaces/{workspace}/projects/{project_id}/issue-types/{issue_type_id}/" => Json,
    DELETE_ISSUE_TYPE "delete_issue_type" => Delete
        "workspaces/{workspace}/projects/{project_id}/issue-types/{issue_type_id}/"
        => Confirm("Issue type deleted successfully"),

    GET_ISSUE_WORKLOGS "get_issue_worklogs" => Get
        "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/worklogs/" => Json,
    GET_TOTAL_WORKLOGS "get_total_worklogs" => Get "workspaces/{workspace}/projects/{project_id}/total-worklogs/" => Json,
    CREATE_WORKLOG "create_worklog" => Post
        "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/worklogs/" => Json,
    UPDATE_WORKLOG "update_worklog" => Patch
        "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/worklogs/{worklog_id}/" => Json,
    DELETE_WORKLOG "delete_worklog" => Delete
        "workspaces/{workspace}/projects/{project_id}/issues/{issue_id}/worklogs/{worklog_id}/"
        => Confirm("Worklog deleted successfully"),
}

/// Look an operation up by its tool name.
pub fn find(name: &str) -> Option<&'static Operation> {
    ALL.iter().find(|op| op.name == name)
}
