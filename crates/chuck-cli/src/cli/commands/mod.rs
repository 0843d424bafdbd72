//! Command implementations.

pub mod categories;
pub mod random;
pub mod search;

use chuck_client::{ChuckClient, ClientConfig};

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbose output
    pub verbose: bool,

    /// Print raw JSON instead of formatted text
    pub json: bool,

    /// Client configuration resolved at startup
    pub config: ClientConfig,
}

impl Context {
    /// Create an API client from the resolved configuration.
    #[must_use]
    pub fn client(&self) -> ChuckClient {
        ChuckClient::from_config(&self.config)
    }
}
