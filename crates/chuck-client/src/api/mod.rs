//! API endpoint modules.

mod jokes;

pub use jokes::{
    CategoriesRequestBuilder, JokesApi, RandomRequestBuilder, SearchRequestBuilder,
    DEFAULT_SEARCH_LIMIT,
};
