//! `chuck categories` - List available joke categories.

use anyhow::{Context as _, Result};

use super::Context;
use crate::output;

pub async fn execute(ctx: &Context) -> Result<()> {
    let client = ctx.client();

    let categories = client
        .jokes()
        .categories()
        .send()
        .await
        .context("failed to fetch categories")?;

    if ctx.json {
        output::print_json(&categories)?;
        return Ok(());
    }

    for category in &categories {
        println!("{category}");
    }

    Ok(())
}
