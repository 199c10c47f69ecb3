use std::fmt;

use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::client::error::{PlaneError, PlaneResult};
use crate::config::{API_KEY_VAR, PlaneConfig};

/// Header the Plane API reads the key from. No bearer prefix.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Versioned prefix every relative path is appended to.
pub const API_PREFIX: &str = "api/v1/";

/// HTTP verbs the Plane API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Everything except GET is sent as a JSON request.
    pub fn sends_json(self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// `https://host` and `https://host///` both become `https://host/api/v1/`.
pub fn api_base_url(host_url: &str) -> String {
    format!("{}/{}", host_url.trim_end_matches('/'), API_PREFIX)
}

/// reqwest is built without a bundled crypto provider; rustls needs one
/// installed process-wide before the first client is created.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Client for the Plane REST API.
///
/// Every tool goes through [`PlaneClient::request`] or
/// [`PlaneClient::execute`], which own URL construction, the API key header,
/// method dispatch and the mapping of failures onto [`PlaneError`].
#[derive(Clone)]
pub struct PlaneClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl fmt::Debug for PlaneClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaneClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl PlaneClient {
    /// Create a new client from the Plane section of the configuration.
    ///
    /// The configured timeout bounds each whole call, connect through body.
    pub fn new(config: &PlaneConfig) -> PlaneResult<Self> {
        install_crypto_provider();
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: api_base_url(&config.host_url),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Get the base URL every relative path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to `api/v1/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform one call and parse the response body as JSON.
    ///
    /// Returns whatever JSON the API sent (object, array or scalar); an empty
    /// success body comes back as `Value::Null`.
    #[instrument(skip(self, body))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> PlaneResult<Value> {
        let url = self.url(path);
        let response = self.send(method, &url, body).await?;
        let bytes = response.bytes().await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| PlaneError::Unexpected {
            message: format!("response from {method} {url} is not valid JSON: {e}"),
        })
    }

    /// Perform one call, check its status and discard the response body
    /// unread.
    #[instrument(skip(self, body))]
    pub async fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> PlaneResult<()> {
        let url = self.url(path);
        self.send(method, &url, body).await?;
        Ok(())
    }

    pub async fn get(&self, path: &str) -> PlaneResult<Value> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> PlaneResult<Value> {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> PlaneResult<Value> {
        self.request(Method::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> PlaneResult<()> {
        self.execute(Method::Delete, path, None).await
    }

    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> PlaneResult<Response> {
        if self.api_key.is_empty() {
            return Err(PlaneError::MissingConfig {
                variable: API_KEY_VAR,
            });
        }

        let mut request = self
            .client
            .request(method.into(), url)
            .header(API_KEY_HEADER, &self.api_key);

        if method.sends_json() {
            request = request.header(CONTENT_TYPE, "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        debug!(%method, url, "Sending Plane API request");

        let response = request.send().await.map_err(|source| {
            warn!(%method, url, error = %source, "Plane API request failed to complete");
            PlaneError::Transport { source }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!(
            %method,
            url,
            status = status.as_u16(),
            reason = status.canonical_reason().unwrap_or_default(),
            "Plane API request failed"
        );

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(PlaneError::from_status(status.as_u16(), error_text))
    }
}
