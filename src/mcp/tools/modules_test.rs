//! Tests for Module and module-issue MCP tools

use rmcp::{handler::server::wrapper::Parameters, model::ErrorCode};
use serde_json::{Value, json};

use crate::mcp::tools::*;
use crate::test_support::{MockPlane, tool_text};

#[tokio::test(flavor = "multi_thread")]
async fn test_list_and_get_modules() {
    let mock = MockPlane::respond_json(json!([{"id": "m1", "name": "Auth"}])).await;
    let server = mock.server();

    let result = server
        .list_modules(Parameters(ListModulesParams {
            project_id: "p1".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(tool_text(&result)).unwrap(),
        json!([{"id": "m1", "name": "Auth"}])
    );

    server
        .get_module(Parameters(ModuleIdParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
        }))
        .await
        .unwrap();

    let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/api/v1/workspaces/acme/projects/p1/modules/",
            "/api/v1/workspaces/acme/projects/p1/modules/m1/",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_module() {
    let mock = MockPlane::respond(201, r#"{"id": "m2"}"#).await;

    mock.server()
        .create_module(Parameters(CreateModuleParams {
            project_id: "p1".to_string(),
            name: "Billing".to_string(),
            description: None,
            start_date: Some("2024-06-01".to_string()),
            target_date: Some("2024-06-30".to_string()),
            lead: Some("u1".to_string()),
        }))
        .await
        .unwrap();

    let request = mock.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.body,
        Some(json!({
            "name": "Billing",
            "start_date": "2024-06-01",
            "target_date": "2024-06-30",
            "lead": "u1"
        }))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_module_status_only() {
    let mock = MockPlane::respond_json(json!({"id": "m1"})).await;

    mock.server()
        .update_module(Parameters(UpdateModuleParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
            name: None,
            description: None,
            start_date: None,
            target_date: None,
            lead: None,
            status: Some("in-progress".to_string()),
        }))
        .await
        .unwrap();

    let request = mock.last_request();
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.path, "/api/v1/workspaces/acme/projects/p1/modules/m1/");
    assert_eq!(request.body, Some(json!({"status": "in-progress"})));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_module_rejects_long_name() {
    let mock = MockPlane::respond_json(json!({})).await;

    let err = mock
        .server()
        .update_module(Parameters(UpdateModuleParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
            name: Some("m".repeat(300)),
            description: None,
            start_date: None,
            target_date: None,
            lead: None,
            status: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(mock.requests().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_module() {
    let mock = MockPlane::respond(204, "").await;

    let result = mock
        .server()
        .delete_module(Parameters(ModuleIdParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(tool_text(&result), "Module deleted successfully");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_module_issue_membership() {
    let mock = MockPlane::respond_json(json!([{"id": "mi1"}])).await;
    let server = mock.server();

    server
        .list_module_issues(Parameters(ListModuleIssuesParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
        }))
        .await
        .unwrap();
    server
        .add_module_issues(Parameters(AddModuleIssuesParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
            issues: vec!["i1".to_string(), "i2".to_string()],
        }))
        .await
        .unwrap();
    let removed = server
        .delete_module_issue(Parameters(RemoveModuleIssueParams {
            project_id: "p1".to_string(),
            module_id: "m1".to_string(),
            issue_id: "i1".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(tool_text(&removed), "Issue removed from module successfully");

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    let base = "/api/v1/workspaces/acme/projects/p1/modules/m1/module-issues/";
    assert_eq!((requests[0].method.as_str(), requests[0].path.as_str()), ("GET", base));
    assert_eq!((requests[1].method.as_str(), requests[1].path.as_str()), ("POST", base));
    assert_eq!(requests[1].body, Some(json!({"issues": ["i1", "i2"]})));
    assert_eq!(requests[2].method, "DELETE");
    assert_eq!(requests[2].path, format!("{base}i1/"));
}
