//! chuck - Chuck Norris jokes CLI
//!
//! A command-line client for the chucknorris.io joke API.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    chuck_cli::run().await
}
