//! Main joke API client implementation.

use crate::api::JokesApi;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use chuck_core::{ChuckError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Main chucknorris.io API client
#[derive(Clone)]
pub struct ChuckClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    timeout: Duration,
}

impl ChuckClient {
    /// Create a new client using default settings
    #[must_use]
    pub fn new() -> Self {
        ChuckClientBuilder::new().build()
    }

    /// Create a client from resolved configuration
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        ChuckClientBuilder::new()
            .base_url(&config.base_url)
            .timeout(config.timeout)
            .build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> ChuckClientBuilder {
        ChuckClientBuilder::new()
    }

    /// Access joke endpoints
    #[must_use]
    pub fn jokes(&self) -> JokesApi<'_> {
        JokesApi::new(self)
    }

    /// Perform a GET request and decode the JSON body into `T`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<T> {
        let body = self.get_raw(path, params, timeout).await?;
        serde_json::from_str(&body).map_err(ChuckError::Json)
    }

    /// Perform a GET request and decode the JSON body into a dynamic value
    pub(crate) async fn get_value(
        &self,
        path: &str,
        params: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<serde_json::Value> {
        self.get(path, params, timeout).await
    }

    /// Issue a single GET request, one attempt only, and return the
    /// body of a 2xx response
    async fn get_raw(
        &self,
        path: &str,
        params: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<String> {
        let url = self.build_url(path, params);
        let timeout = timeout.unwrap_or(self.inner.timeout);
        debug!(url = %url, timeout_secs = timeout.as_secs(), "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| request_error(&e, timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| request_error(&e, timeout))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(status_error(status.as_u16(), body))
        }
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        let mut separator = '?';
        for (key, value) in params {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }

        url
    }
}

impl Default for ChuckClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a reqwest failure onto the matching error kind
fn request_error(err: &reqwest::Error, timeout: Duration) -> ChuckError {
    if err.is_timeout() {
        ChuckError::Timeout(timeout.as_secs())
    } else if err.is_connect() {
        ChuckError::Connection(err.to_string())
    } else {
        ChuckError::Http(err.to_string())
    }
}

/// Convert a non-2xx response to an API error
fn status_error(code: u16, body: String) -> ChuckError {
    // The API reports errors as JSON with a `message` field
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body);

    ChuckError::Api { code, message }
}

/// Builder for configuring a [`ChuckClient`]
pub struct ChuckClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ChuckClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("chuck-cli/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> ChuckClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("failed to build HTTP client");

        ChuckClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                timeout: self.timeout,
            }),
        }
    }
}

impl Default for ChuckClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
