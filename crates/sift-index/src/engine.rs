//! The search engine: orchestration of evaluation, scoring, and snippets.

use std::cmp::Ordering;

use serde::Serialize;
use sift_document::Document;
use sift_query::{snippet_term, tokenize};
use tracing::debug;

use crate::{evaluate::evaluate, index::InvertedIndex, score::score};

/// Snippet length budget, in characters, for the no-match fallback.
const SNIPPET_MAX_LEN: usize = 120;

/// One matched document with its score and display snippet.
///
/// Results are created fresh per query and borrow the engine's documents;
/// their order is established only by the engine's sort step.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// The matched document.
    pub document: &'a Document,
    /// Additive relevance score.
    pub score: f64,
    /// Excerpt of content centered on the first query match.
    pub snippet: String,
}

/// An in-memory boolean search engine.
///
/// Owns an immutable document collection and the inverted index derived
/// from it at construction. Nothing is mutated after construction, so a
/// shared reference can be used freely from multiple threads.
#[derive(Debug)]
pub struct SearchEngine {
    /// The full document collection, in insertion order.
    documents: Vec<Document>,
    /// Index derived from `documents`, never mutated independently.
    index: InvertedIndex,
}

impl SearchEngine {
    /// Creates an engine, building the inverted index once.
    pub fn new(documents: Vec<Document>) -> Self {
        let index = InvertedIndex::build(&documents);
        Self { documents, index }
    }

    /// Returns the full document collection.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Runs a boolean query and returns scored, sorted results.
    ///
    /// The primary sort key is always score descending. When
    /// `sort_by_date` is set, equal scores are broken by date descending
    /// (most recent first); otherwise tie order follows the collection's
    /// insertion order. The full matched set is returned — no pagination
    /// or limiting.
    pub fn search(&self, query: &str, sort_by_date: bool) -> Vec<SearchResult<'_>> {
        let tokens = tokenize(query);
        let matched = evaluate(&tokens, &self.documents, &self.index);
        debug!(query, matched = matched.len(), "boolean evaluation complete");

        let snippet_query = snippet_term(query);

        let mut results: Vec<SearchResult<'_>> = self
            .documents
            .iter()
            .filter(|d| matched.contains(&d.id()))
            .map(|document| SearchResult {
                document,
                score: score(document, query),
                snippet: document.snippet(&snippet_query, SNIPPET_MAX_LEN),
            })
            .collect();

        // Stable sort keeps insertion order among untied-by-date equals.
        results.sort_by(|a, b| compare_results(a, b, sort_by_date));

        results
    }
}

/// Orders results by score descending, optionally breaking ties by date.
fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>, sort_by_date: bool) -> Ordering {
    let by_score = b
        .score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal);

    if by_score != Ordering::Equal || !sort_by_date {
        return by_score;
    }

    b.document.date().cmp(&a.document.date())
}
