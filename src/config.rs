//! Startup configuration.
//!
//! Everything the server needs is read once from CLI flags or the process
//! environment, validated, and handed out as an immutable [`Config`]. Nothing
//! else in the crate looks at environment variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use miette::Diagnostic;
use reqwest::Url;
use thiserror::Error;

pub const HOST_URL_VAR: &str = "PLANE_API_HOST_URL";
pub const API_KEY_VAR: &str = "PLANE_API_KEY";
pub const WORKSPACE_SLUG_VAR: &str = "PLANE_WORKSPACE_SLUG";

pub const DEFAULT_HOST_URL: &str = "https://api.plane.so/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the MCP server talks to its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// MCP streamable HTTP mounted at /mcp
    #[value(alias = "http")]
    StreamableHttp,
}

/// Command line arguments, each with an environment variable fallback.
#[derive(Parser, Debug)]
#[command(name = "plane-mcp")]
#[command(author, version, about = "MCP server for the Plane project management API", long_about = None)]
pub struct Args {
    /// Plane host URL; the REST API is served under <host>/api/v1/
    #[arg(long, env = HOST_URL_VAR, default_value = DEFAULT_HOST_URL)]
    pub host_url: String,

    /// API key sent with every request in the X-API-Key header
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Slug of the workspace all tools operate on
    #[arg(long, env = WORKSPACE_SLUG_VAR)]
    pub workspace_slug: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, env = "PLANE_API_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Host address to bind to (streamable-http transport)
    #[arg(long, env = "MCP_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (streamable-http transport)
    #[arg(short, long, env = "MCP_PORT", default_value_t = 8000)]
    pub port: u16,

    /// MCP transport
    #[arg(long, env = "MCP_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .variables.join(", "))]
    #[diagnostic(
        code(plane_mcp::config::missing),
        help("Export the variables listed above, or pass --api-key / --workspace-slug.")
    )]
    Missing { variables: Vec<&'static str> },

    #[error("Invalid Plane host URL '{url}': {reason}")]
    #[diagnostic(
        code(plane_mcp::config::invalid_host_url),
        help("Use an absolute http(s) URL such as https://api.plane.so/")
    )]
    InvalidHostUrl { url: String, reason: String },

    #[error("Request timeout must be at least one second")]
    #[diagnostic(code(plane_mcp::config::zero_timeout))]
    ZeroTimeout,
}

/// Settings for talking to the Plane API.
#[derive(Debug, Clone)]
pub struct PlaneConfig {
    pub host_url: String,
    pub api_key: String,
    pub workspace_slug: String,
    pub timeout: Duration,
}

impl PlaneConfig {
    pub fn new(
        host_url: impl Into<String>,
        api_key: impl Into<String>,
        workspace_slug: impl Into<String>,
    ) -> Self {
        Self {
            host_url: host_url.into(),
            api_key: api_key.into(),
            workspace_slug: workspace_slug.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Settings for the MCP side of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub transport: Transport,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            transport: Transport::Stdio,
        }
    }
}

/// Complete process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub plane: PlaneConfig,
    pub server: ServerConfig,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let api_key = args.api_key.filter(|v| !v.trim().is_empty());
        let workspace_slug = args.workspace_slug.filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push(API_KEY_VAR);
        }
        if workspace_slug.is_none() {
            missing.push(WORKSPACE_SLUG_VAR);
        }
        let (Some(api_key), Some(workspace_slug)) = (api_key, workspace_slug) else {
            return Err(ConfigError::Missing { variables: missing });
        };

        validate_host_url(&args.host_url)?;
        if args.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            plane: PlaneConfig::new(args.host_url, api_key, workspace_slug)
                .with_timeout(Duration::from_secs(args.timeout)),
            server: ServerConfig {
                host: args.host,
                port: args.port,
                transport: args.transport,
            },
        })
    }
}

fn validate_host_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidHostUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    // api/v1/ is appended to the path, so nothing may follow it
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }
    Ok(())
}
