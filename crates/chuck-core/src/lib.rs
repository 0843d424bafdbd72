//! Core types for the chucknorris.io joke API client.
//!
//! This crate provides the foundational types used across the library:
//!
//! - **Types**: Typed representations of joke API responses
//! - **Errors**: Error handling with [`ChuckError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use chuck_core::{Joke, Result};
//!
//! fn process_joke(joke: Joke) -> Result<()> {
//!     println!("{}", joke.value);
//!     Ok(())
//! }
//! ```

mod error;
pub mod types;

pub use error::{ChuckError, Result};
pub use types::*;
