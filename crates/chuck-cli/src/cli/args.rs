//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// Command-line client for the chucknorris.io joke API
///
/// Fetch a random joke, list categories, or search jokes by text.
#[derive(Parser, Debug)]
#[command(name = "chuck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (include id, permalink and categories)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get a single random joke
    Random(RandomArgs),

    /// List available joke categories
    Categories,

    /// Search jokes by query
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Category to fetch a random joke from
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query string
    pub query: String,

    /// Limit number of results
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,
}
