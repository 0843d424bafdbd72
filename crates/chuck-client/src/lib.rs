//! HTTP client for the chucknorris.io joke API.
//!
//! This crate provides the main [`ChuckClient`] for talking to the API.
//!
//! ```rust,ignore
//! use chuck_client::ChuckClient;
//!
//! let client = ChuckClient::new();
//! let joke = client.jokes().random().category("dev").send().await?;
//! println!("{}", joke["value"]);
//! ```

pub mod api;
mod client;
mod config;

pub use chuck_core::{ChuckError, Result};
pub use client::{ChuckClient, ChuckClientBuilder};
pub use config::*;
