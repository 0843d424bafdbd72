//! `chuck random` - Fetch a single random joke.

use anyhow::{Context as _, Result};
use chuck_core::Joke;

use super::Context;
use crate::cli::args::RandomArgs;
use crate::output;

pub async fn execute(ctx: &Context, args: RandomArgs) -> Result<()> {
    let client = ctx.client();

    let mut builder = client.jokes().random();
    if let Some(category) = args.category {
        builder = builder.category(category);
    }

    let data = builder
        .send()
        .await
        .context("failed to fetch random joke")?;

    if ctx.json {
        output::print_json(&data)?;
        return Ok(());
    }

    // Tolerant typed view for formatting only; the --json path above
    // prints the decoded body untouched.
    let joke = Joke::from_value(data).unwrap_or_default();
    output::print_joke(&joke, ctx.verbose);

    Ok(())
}
