//! Client configuration types.

use std::time::Duration;

/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "CHUCK_API_BASE_URL";

/// Environment variable overriding the request timeout, in seconds
pub const ENV_TIMEOUT: &str = "CHUCK_CLI_TIMEOUT";

/// The joke API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved client configuration
///
/// Read once at process start and passed into the client; nothing in
/// the request path consults the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are issued against
    pub base_url: String,

    /// Timeout applied to each request unless overridden per call
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read configuration from the environment.
    ///
    /// Unset, empty or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var(ENV_TIMEOUT)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Self { base_url, timeout }
    }
}
