use serde::{Deserialize, Serialize};

use crate::Result;

/// A single joke as returned by the random and search endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Server-assigned joke identifier
    #[serde(default)]
    pub id: String,

    /// The joke text
    #[serde(default)]
    pub value: String,

    /// Permalink to the joke
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Icon displayed alongside the joke
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Categories the joke belongs to (often empty)
    #[serde(default, deserialize_with = "super::null_to_default")]
    pub categories: Vec<String>,
}

impl Joke {
    /// Build a `Joke` from a decoded JSON value, substituting defaults
    /// for missing fields. Unknown fields are ignored.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
