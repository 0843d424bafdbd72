use thiserror::Error;

/// Result type alias for joke API operations
pub type Result<T> = std::result::Result<T, ChuckError>;

/// Errors that can occur when talking to the joke API
#[derive(Error, Debug)]
pub enum ChuckError {
    /// API returned a non-2xx response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("invalid JSON received from API: {0}")]
    Json(#[from] serde_json::Error),

    /// Response decoded but is missing a required field
    #[error("API returned unexpected response shape: missing `{field}` field")]
    Shape {
        /// Name of the missing field
        field: &'static str,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ChuckError {
    /// Returns true if the failure was a per-request timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
