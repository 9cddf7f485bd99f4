//! Boolean query evaluation.
//!
//! Evaluation is a flat left-to-right scan over the token stream with no
//! operator precedence beyond NOT binding to the single next operand, and
//! no grouping. Consumers depend on several leniencies: a stray leading
//! operator does not prevent the first operand from initializing the
//! result, an operand pair with no operator between them defaults to AND,
//! and a pending operator persists until replaced (`a OR b c` also ORs
//! `c`). None of these may be "fixed" into stricter parsing.

use std::collections::HashSet;

use sift_document::Document;

use crate::index::InvertedIndex;

/// The operator applied when the next operand combines with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    /// Intersection; also the default when no operator was given.
    And,
    /// Union.
    Or,
}

/// Evaluates a token stream into the set of matching document ids.
///
/// `AND` / `OR` set the pending operator, `NOT` complements the single
/// next operand against the full collection, and every other token is an
/// operand: a phrase if it contains whitespace (resolved by scanning all
/// documents), otherwise a term (resolved through the index). A query with
/// no operand tokens at all evaluates to the empty set — that is policy,
/// not a failure.
pub fn evaluate(
    tokens: &[String],
    documents: &[Document],
    index: &InvertedIndex,
) -> HashSet<u32> {
    let mut result: Option<HashSet<u32>> = None;
    let mut pending = PendingOp::And;
    let mut negate_next = false;

    for token in tokens {
        if token.eq_ignore_ascii_case("and") {
            pending = PendingOp::And;
            continue;
        }
        if token.eq_ignore_ascii_case("or") {
            pending = PendingOp::Or;
            continue;
        }
        if token.eq_ignore_ascii_case("not") {
            negate_next = true;
            continue;
        }

        let mut operand = resolve(token, documents, index);

        if negate_next {
            operand = complement(&operand, documents);
            negate_next = false;
        }

        result = Some(match result {
            // The first operand always initializes, regardless of any
            // operator tokens seen before it.
            None => operand,
            Some(acc) => match pending {
                PendingOp::Or => &acc | &operand,
                PendingOp::And => &acc & &operand,
            },
        });
    }

    result.unwrap_or_default()
}

/// Resolves a single operand token to a document-id set.
///
/// A token containing whitespace is a quoted phrase: every document is
/// scanned for lowercased substring containment, since the index carries no
/// positional information. Anything else is a term looked up in the index.
fn resolve(token: &str, documents: &[Document], index: &InvertedIndex) -> HashSet<u32> {
    if token.contains(char::is_whitespace) {
        let phrase_lower = token.to_lowercase();
        documents
            .iter()
            .filter(|d| d.contains_phrase(&phrase_lower))
            .map(Document::id)
            .collect()
    } else {
        index.documents_for_term(token)
    }
}

/// Complements an id set against the full collection.
fn complement(operand: &HashSet<u32>, documents: &[Document]) -> HashSet<u32> {
    documents
        .iter()
        .map(Document::id)
        .filter(|id| !operand.contains(id))
        .collect()
}
