//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::process::ExitCode;

use args::{Cli, Commands};
use chuck_client::ClientConfig;
use clap::Parser;

/// Exit code for any handled failure: empty query, or a network,
/// timeout, HTTP, decode or shape error.
const EXIT_FAILURE: u8 = 2;

/// Exit code when argument parsing resolves no subcommand.
const EXIT_USAGE: u8 = 1;

/// Run the CLI application, returning the process exit code.
pub async fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(&err),
    };

    // Environment is consulted exactly once; handlers only ever see
    // the resolved configuration.
    let config = ClientConfig::from_env();

    let ctx = commands::Context {
        verbose: cli.verbose,
        json: cli.json,
        config,
    };

    let result = match cli.command {
        Commands::Random(args) => commands::random::execute(&ctx, args).await,
        Commands::Categories => commands::categories::execute(&ctx).await,
        Commands::Search(args) => commands::search::execute(&ctx, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Help and version requests are not failures; anything else falls
/// through without a subcommand to dispatch.
fn parse_failure(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(EXIT_USAGE)
    } else {
        ExitCode::SUCCESS
    }
}
