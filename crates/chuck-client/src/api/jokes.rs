//! Joke endpoints.

use crate::ChuckClient;
use chuck_core::{ChuckError, Result};
use serde_json::Value;
use std::time::Duration;

/// Number of search results kept client-side when no limit is given
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Joke endpoints
pub struct JokesApi<'a> {
    client: &'a ChuckClient,
}

impl<'a> JokesApi<'a> {
    pub(crate) fn new(client: &'a ChuckClient) -> Self {
        Self { client }
    }

    /// Fetch a random joke
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let joke = client.jokes().random().category("dev").send().await?;
    /// println!("{}", joke["value"]);
    /// ```
    #[must_use]
    pub fn random(&self) -> RandomRequestBuilder<'a> {
        RandomRequestBuilder::new(self.client)
    }

    /// List available joke categories
    #[must_use]
    pub fn categories(&self) -> CategoriesRequestBuilder<'a> {
        CategoriesRequestBuilder::new(self.client)
    }

    /// Search jokes by free-text query
    #[must_use]
    pub fn search(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, query.into())
    }
}

/// Builder for random-joke requests
pub struct RandomRequestBuilder<'a> {
    client: &'a ChuckClient,
    category: Option<String>,
    timeout: Option<Duration>,
}

impl<'a> RandomRequestBuilder<'a> {
    fn new(client: &'a ChuckClient) -> Self {
        Self {
            client,
            category: None,
            timeout: None,
        }
    }

    /// Draw the joke from a single category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Override the request timeout for this call
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute the request
    ///
    /// The decoded body is returned unchanged; it is only checked to be
    /// a JSON object carrying a `value` field.
    pub async fn send(self) -> Result<Value> {
        let mut params = Vec::new();
        if let Some(category) = self.category.as_deref() {
            params.push(("category", category));
        }

        let data = self
            .client
            .get_value("/jokes/random", &params, self.timeout)
            .await?;

        if !data
            .as_object()
            .is_some_and(|obj| obj.contains_key("value"))
        {
            return Err(ChuckError::Shape { field: "value" });
        }

        Ok(data)
    }
}

/// Builder for category-list requests
pub struct CategoriesRequestBuilder<'a> {
    client: &'a ChuckClient,
    timeout: Option<Duration>,
}

impl<'a> CategoriesRequestBuilder<'a> {
    fn new(client: &'a ChuckClient) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Override the request timeout for this call
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute the request
    ///
    /// The decoded list is returned as-is; this endpoint gets no shape
    /// validation beyond JSON decoding.
    pub async fn send(self) -> Result<Vec<String>> {
        self.client
            .get("/jokes/categories", &[], self.timeout)
            .await
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a ChuckClient,
    query: String,
    limit: usize,
    timeout: Option<Duration>,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a ChuckClient, query: String) -> Self {
        Self {
            client,
            query,
            limit: DEFAULT_SEARCH_LIMIT,
            timeout: None,
        }
    }

    /// Keep at most `limit` results. Applied client-side; the server
    /// may return more items than asked for.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Override the request timeout for this call
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute the search
    ///
    /// When the decoded body is an object whose `result` field is an
    /// array, that array is truncated in place to the first `limit`
    /// elements. Any other body is returned unmodified.
    pub async fn send(self) -> Result<Value> {
        let params = [("query", self.query.as_str())];

        let mut data = self
            .client
            .get_value("/jokes/search", &params, self.timeout)
            .await?;

        if let Some(Value::Array(result)) = data.get_mut("result") {
            result.truncate(self.limit);
        }

        Ok(data)
    }
}
