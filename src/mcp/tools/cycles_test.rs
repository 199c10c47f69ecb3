//! Tests for Cycle and cycle-issue MCP tools

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::mcp::tools::*;
use crate::test_support::{MockPlane, tool_text};

fn cycle_ids() -> CycleIdParams {
    CycleIdParams {
        project_id: "p1".to_string(),
        cycle_id: "c1".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cycle_paths_have_single_version_prefix() {
    let mock = MockPlane::respond_json(json!({"id": "c1"})).await;
    let server = mock.server();

    server
        .list_cycles(Parameters(ListCyclesParams {
            project_id: "p1".to_string(),
        }))
        .await
        .unwrap();
    server.get_cycle(Parameters(cycle_ids())).await.unwrap();

    let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        [
            "/api/v1/workspaces/acme/projects/p1/cycles/",
            "/api/v1/workspaces/acme/projects/p1/cycles/c1/",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_and_update_cycle() {
    let mock = MockPlane::respond_json(json!({"id": "c2"})).await;
    let server = mock.server();

    server
        .create_cycle(Parameters(CreateCycleParams {
            project_id: "p1".to_string(),
            name: "Sprint 8".to_string(),
            description: Some("Payments".to_string()),
            start_date: Some("2024-06-03".to_string()),
            end_date: Some("2024-06-17".to_string()),
        }))
        .await
        .unwrap();
    server
        .update_cycle(Parameters(UpdateCycleParams {
            project_id: "p1".to_string(),
            cycle_id: "c2".to_string(),
            name: None,
            description: None,
            start_date: None,
            end_date: Some("2024-06-21".to_string()),
        }))
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "name": "Sprint 8",
            "description": "Payments",
            "start_date": "2024-06-03",
            "end_date": "2024-06-17"
        }))
    );
    assert_eq!(requests[1].method, "PATCH");
    assert_eq!(
        requests[1].path,
        "/api/v1/workspaces/acme/projects/p1/cycles/c2/"
    );
    assert_eq!(requests[1].body, Some(json!({"end_date": "2024-06-21"})));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_cycle_sends_empty_description() {
    let mock = MockPlane::respond(201, r#"{"id": "c3"}"#).await;

    mock.server()
        .create_cycle(Parameters(CreateCycleParams {
            project_id: "p1".to_string(),
            name: "Sprint 9".to_string(),
            description: Some(String::new()),
            start_date: None,
            end_date: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        mock.last_request().body,
        Some(json!({"name": "Sprint 9", "description": ""}))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_cycle() {
    let mock = MockPlane::respond(204, "").await;

    let result = mock
        .server()
        .delete_cycle(Parameters(cycle_ids()))
        .await
        .unwrap();

    assert_eq!(tool_text(&result), "Cycle deleted successfully");
    assert_eq!(mock.last_request().method, "DELETE");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transfer_cycle_issues() {
    let mock = MockPlane::respond_json(json!({"message": "Success"})).await;

    mock.server()
        .transfer_cycle_issues(Parameters(TransferCycleIssuesParams {
            project_id: "p1".to_string(),
            cycle_id: "c1".to_string(),
            new_cycle_id: "c2".to_string(),
        }))
        .await
        .unwrap();

    let request = mock.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.path,
        "/api/v1/workspaces/acme/projects/p1/cycles/c1/transfer-issues/"
    );
    assert_eq!(request.body, Some(json!({"new_cycle_id": "c2"})));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cycle_issue_membership() {
    let mock = MockPlane::respond_json(json!([])).await;
    let server = mock.server();

    server
        .list_cycle_issues(Parameters(ListCycleIssuesParams {
            project_id: "p1".to_string(),
            cycle_id: "c1".to_string(),
        }))
        .await
        .unwrap();
    server
        .add_cycle_issues(Parameters(AddCycleIssuesParams {
            project_id: "p1".to_string(),
            cycle_id: "c1".to_string(),
            issues: vec!["i1".to_string()],
        }))
        .await
        .unwrap();
    let removed = server
        .delete_cycle_issue(Parameters(RemoveCycleIssueParams {
            project_id: "p1".to_string(),
            cycle_id: "c1".to_string(),
            issue_id: "i1".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(tool_text(&removed), "Issue removed from cycle successfully");

    let requests = mock.requests();
    let base = "/api/v1/workspaces/acme/projects/p1/cycles/c1/cycle-issues/";
    assert_eq!(requests[0].path, base);
    assert_eq!(requests[1].body, Some(json!({"issues": ["i1"]})));
    assert_eq!(requests[2].path, format!("{base}i1/"));
}
