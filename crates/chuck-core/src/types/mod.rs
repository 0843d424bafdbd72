//! Typed representations of joke API responses.
//!
//! Constructed only from server JSON, tolerant of missing fields. The
//! raw-JSON output path never goes through these; they exist for code
//! that wants typed access to a decoded response.

mod joke;
mod search;

pub use joke::Joke;
pub use search::SearchResults;

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` as the field's default value, the
/// same as an absent key.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
