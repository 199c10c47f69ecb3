//! Plane MCP server binary.
//!
//! Reads configuration, builds the Plane client and serves the tool set on
//! the selected transport. Logs go to stderr; stdout belongs to the stdio
//! transport.

use clap::Parser;
use miette::Diagnostic;
use plane_mcp::client::PlaneError;
use plane_mcp::config::{Args, Config, ConfigError};
use plane_mcp::mcp::{PlaneMcpServer, ServeError, serve};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] PlaneError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Serve(#[from] ServeError),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plane_mcp=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();

    run().await?;
    Ok(())
}

async fn run() -> Result<(), BinaryError> {
    let config = Config::try_from(Args::parse())?;
    let server = PlaneMcpServer::from_config(&config.plane)?;

    info!(
        tools = server.registered_tools().len(),
        workspace = server.workspace(),
        transport = ?config.server.transport,
        "Starting Plane MCP server"
    );

    serve(server, &config.server).await?;
    Ok(())
}
