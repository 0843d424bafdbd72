//! Output formatting for text and JSON modes.

use anyhow::Result;
use chuck_core::{Joke, SearchResults};
use colored::Colorize;
use serde::Serialize;

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a joke in human-readable form.
pub fn print_joke(joke: &Joke, verbose: bool) {
    print!("{}", render_joke(joke, verbose));
}

/// Print search results as a numbered list.
pub fn print_search_results(results: &SearchResults, verbose: bool) {
    print!("{}", render_search_results(results, verbose));
}

fn render_joke(joke: &Joke, verbose: bool) -> String {
    let mut out = String::new();

    if verbose {
        out.push_str(&format!("{} {}\n", "ID:".bold(), joke.id));
        if let Some(url) = &joke.url {
            out.push_str(&format!("{} {url}\n", "URL:".bold()));
        }
        if !joke.categories.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                "Categories:".bold(),
                joke.categories.join(", ")
            ));
        }
        out.push('\n');
    }

    if joke.value.is_empty() {
        out.push_str("(no joke returned)\n");
    } else {
        out.push_str(&joke.value);
        out.push('\n');
    }

    out
}

fn render_search_results(results: &SearchResults, verbose: bool) -> String {
    let mut out = String::new();

    for (idx, joke) in results.result.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, joke.value));
        if verbose {
            out.push_str(&format!("   id: {}\n", joke.id));
            if !joke.categories.is_empty() {
                out.push_str(&format!("   categories: {}\n", joke.categories.join(", ")));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke(id: &str, value: &str, categories: &[&str]) -> Joke {
        Joke {
            id: id.into(),
            value: value.into(),
            url: None,
            icon_url: None,
            categories: categories.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn plain_joke_is_just_the_text() {
        let out = render_joke(&joke("1", "a funny joke", &[]), false);
        assert_eq!(out, "a funny joke\n");
    }

    #[test]
    fn verbose_joke_includes_id_and_categories() {
        let out = render_joke(&joke("abc", "a dev joke", &["dev", "nerdy"]), true);
        assert!(out.contains("abc"));
        assert!(out.contains("dev, nerdy"));
        assert!(out.ends_with("a dev joke\n"));
    }

    #[test]
    fn empty_value_gets_a_placeholder() {
        let out = render_joke(&Joke::default(), false);
        assert_eq!(out, "(no joke returned)\n");
    }

    #[test]
    fn search_results_are_numbered_from_one() {
        let results = SearchResults {
            total: 2,
            result: vec![joke("1", "x", &[]), joke("2", "y", &[])],
        };
        let out = render_search_results(&results, false);
        assert_eq!(out, "1. x\n2. y\n");
    }

    #[test]
    fn verbose_search_results_list_ids() {
        let results = SearchResults {
            total: 1,
            result: vec![joke("abc", "x", &["dev"])],
        };
        let out = render_search_results(&results, true);
        assert!(out.contains("id: abc"));
        assert!(out.contains("categories: dev"));
    }
}
