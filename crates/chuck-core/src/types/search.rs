use serde::{Deserialize, Serialize};

use super::Joke;
use crate::Result;

/// Search results from `/jokes/search`
///
/// The `result` list is trimmed client-side before the CLI sees it;
/// the server may return more items than were asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Total number of matches reported by the server
    #[serde(default)]
    pub total: u64,

    /// Matching jokes
    #[serde(default, deserialize_with = "super::null_to_default")]
    pub result: Vec<Joke>,
}

impl SearchResults {
    /// Build `SearchResults` from a decoded JSON value, substituting
    /// defaults for missing fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns true if there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Number of jokes in this response
    #[must_use]
    pub fn len(&self) -> usize {
        self.result.len()
    }
}
