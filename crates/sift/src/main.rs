//! Command-line interface for the `sift` boolean search engine.

mod output;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use sift_document::{Document, load_documents, parse_documents};
use sift_index::SearchEngine;

use crate::output::{print_json, print_table};

/// Sample collection embedded for queries without an external source.
const SAMPLE_DOCS: &str = include_str!("../assets/sample-docs.json");

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Boolean full-text search over an in-memory document collection")]
/// Top-level CLI options.
struct Cli {
    /// Query to run; supports AND/OR/NOT and "quoted phrases".
    /// With no query, reads queries interactively from stdin.
    query: Vec<String>,

    /// Load the document collection from a JSON file instead of the
    /// built-in samples
    #[arg(long, value_name = "PATH")]
    docs: Option<PathBuf>,

    /// Break score ties by date, newest first
    #[arg(long)]
    date: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Log pipeline details to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let documents = match load_collection(cli.docs.as_deref()) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = SearchEngine::new(documents);

    if cli.query.is_empty() {
        return repl(&engine, cli.date, cli.json);
    }

    let query = cli.query.join(" ");
    match run_query(&engine, &query, cli.date, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the collection from `--docs` or falls back to the embedded samples.
fn load_collection(
    path: Option<&std::path::Path>,
) -> Result<Vec<Document>, sift_document::DocumentError> {
    match path {
        Some(path) => load_documents(path),
        None => parse_documents(SAMPLE_DOCS),
    }
}

/// Runs a single query and prints its results.
fn run_query(
    engine: &SearchEngine,
    query: &str,
    by_date: bool,
    json: bool,
) -> Result<(), serde_json::Error> {
    let results = engine.search(query, by_date);

    if json {
        print_json(query, &results)?;
    } else {
        print_table(query, &results);
    }
    Ok(())
}

/// Reads queries from stdin until EOF or an exit command.
fn repl(engine: &SearchEngine, by_date: bool, json: bool) -> ExitCode {
    println!(
        "sift: {} documents loaded. Enter a query (AND/OR/NOT, \"quoted phrases\"), or 'exit'.",
        engine.documents().len()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: failed to read query: {e}");
                return ExitCode::FAILURE;
            }
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            return ExitCode::SUCCESS;
        }

        // A failed render is reported but does not end the session.
        if let Err(e) = run_query(engine, query, by_date, json) {
            eprintln!("error: failed to serialize JSON: {e}");
        }
    }
}
