//! In-process stand-in for the Plane API.
//!
//! Binds an axum server to an ephemeral port, answers every request with a
//! canned status and body, and records what it received so tests can assert
//! on method, path, headers and payload.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use serde_json::Value;
use tokio::net::TcpListener;

use rmcp::model::{CallToolResult, RawContent};

use crate::client::{API_KEY_HEADER, PlaneClient};
use crate::config::PlaneConfig;
use crate::mcp::PlaneMcpServer;

pub const TEST_API_KEY: &str = "plane_api_test_key";
pub const TEST_WORKSPACE: &str = "acme";

/// One request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockPlane {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockPlane {
    /// Answer every request with `status` and `body`.
    pub async fn respond(status: u16, body: impl Into<String>) -> Self {
        Self::spawn(status, body.into(), None).await
    }

    /// Answer every request with 200 and the given JSON.
    pub async fn respond_json(value: Value) -> Self {
        Self::spawn(200, value.to_string(), None).await
    }

    /// Like [`MockPlane::respond`], but wait `delay` before answering.
    pub async fn respond_after(delay: Duration, status: u16, body: impl Into<String>) -> Self {
        Self::spawn(status, body.into(), Some(delay)).await
    }

    async fn spawn(status: u16, body: String, delay: Option<Duration>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body,
            delay,
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
            _handle: handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock Plane server received no requests")
    }

    pub fn config(&self) -> PlaneConfig {
        PlaneConfig::new(&self.url, TEST_API_KEY, TEST_WORKSPACE)
    }

    pub fn client(&self) -> PlaneClient {
        PlaneClient::new(&self.config()).unwrap()
    }

    /// MCP server wired to this mock for workspace [`TEST_WORKSPACE`].
    pub fn server(&self) -> PlaneMcpServer {
        PlaneMcpServer::new(self.client(), TEST_WORKSPACE)
    }
}

/// Text of the single content item a tool returned.
pub fn tool_text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1);
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_text = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let body = if body.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())),
        )
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        api_key: header_text(API_KEY_HEADER),
        content_type: header_text(header::CONTENT_TYPE.as_str()),
        body,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// URL of a port nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
