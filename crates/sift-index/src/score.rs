//! Additive relevance scoring.

use sift_document::Document;
use sift_query::{extract_phrases, extract_terms};

/// Bonus for each distinct quoted phrase contained in the content.
const PHRASE_BONUS: f64 = 2.0;

/// Computes the relevance score of a document against a raw query.
///
/// Each distinct non-operator query term contained in the document's
/// lowercased content adds 1.0 (substring containment, no word-boundary
/// check), and each distinct quoted phrase contained adds 2.0. The result
/// is an unnormalized additive count, not tf-idf or a calibrated
/// probability.
pub fn score(document: &Document, raw_query: &str) -> f64 {
    let mut total = 0.0;

    for term in extract_terms(raw_query) {
        if document.contains_term(&term) {
            total += 1.0;
        }
    }

    let mut seen: Vec<String> = Vec::new();
    for phrase in extract_phrases(raw_query) {
        let phrase_lower = phrase.to_lowercase();
        if seen.contains(&phrase_lower) {
            continue;
        }
        if document.contains_phrase(&phrase_lower) {
            total += PHRASE_BONUS;
        }
        seen.push(phrase_lower);
    }

    total
}
