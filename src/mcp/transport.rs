//! Running the server over stdio or streamable HTTP.

use std::net::SocketAddr;

use axum::Router;
use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{ServerConfig, Transport};

use super::server::PlaneMcpServer;
use super::service::create_mcp_service;

/// Path the streamable HTTP endpoint is mounted at.
pub const MCP_PATH: &str = "/mcp";

#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(plane_mcp::serve::bind),
        help("Pick a free port with --port or MCP_PORT.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    #[diagnostic(code(plane_mcp::serve::io))]
    Io(#[from] std::io::Error),

    #[error("MCP session failed: {message}")]
    #[diagnostic(code(plane_mcp::serve::mcp))]
    Mcp { message: String },
}

/// Serve `server` on the configured transport until the client goes away or
/// the process receives Ctrl-C.
pub async fn serve(server: PlaneMcpServer, config: &ServerConfig) -> Result<(), ServeError> {
    match config.transport {
        Transport::Stdio => serve_stdio(server).await,
        Transport::StreamableHttp => serve_http(server, config.bind_addr()).await,
    }
}

async fn serve_stdio(server: PlaneMcpServer) -> Result<(), ServeError> {
    info!("Serving MCP over stdio");

    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServeError::Mcp {
            message: e.to_string(),
        })?;

    tokio::select! {
        quit = running.waiting() => {
            let reason = quit.map_err(|e| ServeError::Mcp { message: e.to_string() })?;
            info!(?reason, "MCP client disconnected");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }
    Ok(())
}

/// Router with the MCP endpoint nested at [`MCP_PATH`].
pub fn router(server: PlaneMcpServer, ct: CancellationToken) -> Router {
    Router::new()
        .nest_service(MCP_PATH, create_mcp_service(server, ct))
        .layer(TraceLayer::new_for_http())
}

async fn serve_http(server: PlaneMcpServer, addr: SocketAddr) -> Result<(), ServeError> {
    let ct = CancellationToken::new();
    let app = router(server, ct.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!("MCP server listening on http://{}{}", addr, MCP_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl-C");
            }
            info!("Shutting down");
            ct.cancel();
        })
        .await?;
    Ok(())
}
