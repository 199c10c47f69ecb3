//! MCP Streamable HTTP service creation

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use super::server::PlaneMcpServer;

/// Create the Streamable HTTP service for `server`.
///
/// Each session gets its own clone of the server; clones share the
/// underlying HTTP connection pool. Nest the result under `/mcp`:
///
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use plane_mcp::{client::PlaneClient, config::PlaneConfig, mcp::{PlaneMcpServer, create_mcp_service}};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let config = PlaneConfig::new("https://api.plane.so", "key", "acme");
/// let server = PlaneMcpServer::from_config(&config)?;
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(server, CancellationToken::new()));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    server: PlaneMcpServer,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<PlaneMcpServer, LocalSessionManager> {
    // rmcp expects io::Error from the factory
    let service_factory = move || -> Result<PlaneMcpServer, std::io::Error> { Ok(server.clone()) };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None;
    config.sse_retry = None;
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
