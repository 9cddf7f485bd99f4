//! Bare-term extraction from raw query strings.
//!
//! The scorer and the snippet selector both work from the raw query rather
//! than the token stream: quotes are stripped, the text is lowercased, and
//! terms are the runs of ASCII alphanumerics that remain. Operator keywords
//! are discarded.

use crate::phrase::extract_phrases;

/// Returns true if the token is one of the boolean operator keywords.
///
/// Matching is case-insensitive, per the query grammar.
pub fn is_operator(token: &str) -> bool {
    token.eq_ignore_ascii_case("and")
        || token.eq_ignore_ascii_case("or")
        || token.eq_ignore_ascii_case("not")
}

/// Extracts the distinct non-operator terms from a raw query.
///
/// The query is lowercased and quote marks dropped, then split on every run
/// of non-alphanumeric characters, so punctuation and quotes never leak
/// into a term. Order of first appearance is preserved; duplicates are
/// removed.
///
/// # Example
///
/// ```
/// use sift_query::extract_terms;
///
/// let terms = extract_terms("Java AND \"search engine\" java");
/// assert_eq!(terms, vec!["java", "search", "engine"]);
/// ```
pub fn extract_terms(raw: &str) -> Vec<String> {
    let lower = raw.to_lowercase();
    let mut terms: Vec<String> = Vec::new();

    for part in lower.split(|c: char| !c.is_ascii_alphanumeric()) {
        if part.is_empty() || is_operator(part) {
            continue;
        }
        if !terms.iter().any(|t| t == part) {
            terms.push(part.to_string());
        }
    }

    terms
}

/// Chooses the string the snippet extractor should center on.
///
/// Preference order: the first quoted phrase, else the first non-operator
/// term, else the whole query trimmed. The result is always lowercase so it
/// can be matched directly against a document's cached lowercase content.
pub fn snippet_term(raw: &str) -> String {
    let phrases = extract_phrases(raw);
    if let Some(first) = phrases.first() {
        return first.to_lowercase();
    }

    if let Some(first) = extract_terms(raw).into_iter().next() {
        return first;
    }

    // Last resort: operator-only or punctuation-only queries.
    raw.trim().to_lowercase()
}
