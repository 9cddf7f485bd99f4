//! Rendering and JSON serialization for CLI output.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use sift_index::SearchResult;

/// JSON output for a single query's results.
#[derive(Serialize)]
struct JsonQueryResults<'a> {
    /// The original query string.
    query: &'a str,
    /// Total matches returned.
    total_matches: usize,
    /// Results in engine order.
    results: &'a [SearchResult<'a>],
}

/// Prints results as pretty JSON on stdout.
pub fn print_json(query: &str, results: &[SearchResult<'_>]) -> Result<(), serde_json::Error> {
    let output = JsonQueryResults {
        query,
        total_matches: results.len(),
        results,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Prints results as a table on stdout.
pub fn print_table(query: &str, results: &[SearchResult<'_>]) {
    if results.is_empty() {
        println!("No results for '{query}'.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Score", "Id", "Title", "Date", "Snippet"]);

    for result in results {
        table.add_row(vec![
            format!("{:.1}", result.score),
            result.document.id().to_string(),
            result.document.title().to_string(),
            result.document.date().to_string(),
            result.snippet.clone(),
        ]);
    }

    println!("{} results for '{query}':", results.len());
    println!("{table}");
}
