//! # chuck-cli
//!
//! Command-line client for the chucknorris.io joke API.
//!
//! ## Subcommands
//!
//! - **random**: fetch a single random joke, optionally from a category
//! - **categories**: list available joke categories
//! - **search**: free-text search with client-side result trimming
//!
//! Global `--json` switches every subcommand to raw JSON output;
//! `--verbose` adds ids, permalinks and categories to the text output.

pub mod cli;
pub mod output;

pub use cli::run;
