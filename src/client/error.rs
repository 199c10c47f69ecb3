use miette::Diagnostic;
use thiserror::Error;

/// Every way a call to the Plane API can fail.
#[derive(Error, Diagnostic, Debug)]
pub enum PlaneError {
    #[error("{variable} environment variable is not set")]
    #[diagnostic(
        code(plane_mcp::client::missing_config),
        help("The server must be started with an API key and a workspace slug.")
    )]
    MissingConfig { variable: &'static str },

    #[error("HTTP 400 Bad Request: {body}. Check request payload format and required fields.")]
    #[diagnostic(code(plane_mcp::client::bad_request))]
    BadRequest { body: String },

    #[error("HTTP 403 Forbidden: Access denied. Check project permissions and API key.")]
    #[diagnostic(code(plane_mcp::client::forbidden))]
    Forbidden { body: String },

    #[error("HTTP 404 Not Found: {body}. Check the resource exists and API endpoint is correct.")]
    #[diagnostic(code(plane_mcp::client::not_found))]
    NotFound { body: String },

    #[error("HTTP {status}: {body}")]
    #[diagnostic(code(plane_mcp::client::status))]
    Status { status: u16, body: String },

    #[error("Request failed: {source}")]
    #[diagnostic(
        code(plane_mcp::client::transport),
        help("Check that PLANE_API_HOST_URL is reachable from this machine.")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected error: {message}")]
    #[diagnostic(code(plane_mcp::client::unexpected))]
    Unexpected { message: String },
}

impl PlaneError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => PlaneError::BadRequest { body },
            403 => PlaneError::Forbidden { body },
            404 => PlaneError::NotFound { body },
            _ => PlaneError::Status { status, body },
        }
    }

    /// HTTP status of the upstream response, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PlaneError::BadRequest { .. } => Some(400),
            PlaneError::Forbidden { .. } => Some(403),
            PlaneError::NotFound { .. } => Some(404),
            PlaneError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw upstream response body, if the failure came from one.
    pub fn body(&self) -> Option<&str> {
        match self {
            PlaneError::BadRequest { body }
            | PlaneError::Forbidden { body }
            | PlaneError::NotFound { body }
            | PlaneError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlaneError {
    fn from(source: reqwest::Error) -> Self {
        PlaneError::Transport { source }
    }
}

impl From<serde_json::Error> for PlaneError {
    fn from(e: serde_json::Error) -> Self {
        PlaneError::Unexpected {
            message: e.to_string(),
        }
    }
}

pub type PlaneResult<T> = Result<T, PlaneError>;
