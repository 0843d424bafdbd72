//! `chuck search` - Search jokes by free-text query.

use anyhow::{bail, Context as _, Result};
use chuck_core::SearchResults;

use super::Context;
use crate::cli::args::SearchArgs;
use crate::output;

pub async fn execute(ctx: &Context, args: SearchArgs) -> Result<()> {
    // Checked before any network traffic happens
    if args.query.trim().is_empty() {
        bail!("search query cannot be empty");
    }

    let client = ctx.client();

    let data = client
        .jokes()
        .search(args.query.as_str())
        .limit(args.limit)
        .send()
        .await
        .context("failed to search jokes")?;

    if ctx.json {
        output::print_json(&data)?;
        return Ok(());
    }

    // A body without a usable result list counts as no results, not as
    // an error.
    let results = SearchResults::from_value(data).unwrap_or_default();
    if results.is_empty() {
        println!("No jokes found.");
        return Ok(());
    }

    output::print_search_results(&results, ctx.verbose);

    Ok(())
}
