//! Inverted index mapping terms to the documents that contain them.

use std::collections::{HashMap, HashSet};

use sift_document::Document;
use tracing::debug;

/// Inverted index from normalized term to a set of document ids.
///
/// Terms are the lowercase alphanumeric runs of each document's content.
/// The index is built once from a collection and never mutated afterward;
/// every stored term maps to a non-empty set, and an absent term means
/// "matches no document". Ids are stored instead of document references so
/// set membership never depends on reference identity.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// term → ids of documents whose content contains the term.
    postings: HashMap<String, HashSet<u32>>,
}

impl InvertedIndex {
    /// Builds an index from a document collection.
    pub fn build(documents: &[Document]) -> Self {
        let mut index = Self::default();
        for document in documents {
            index.add(document);
        }
        debug!(
            documents = documents.len(),
            terms = index.postings.len(),
            "inverted index built"
        );
        index
    }

    /// Indexes one document's content.
    fn add(&mut self, document: &Document) {
        for term in tokenize_content(document.content_lower()) {
            self.postings
                .entry(term.to_string())
                .or_default()
                .insert(document.id());
        }
    }

    /// Looks up the documents containing a term, case-insensitively.
    ///
    /// Returns a copy of the posting set so callers can combine it with
    /// set algebra without borrowing the index; unknown terms yield the
    /// empty set.
    pub fn documents_for_term(&self, term: &str) -> HashSet<u32> {
        self.postings
            .get(&term.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

/// Splits lowercase content into its alphanumeric runs.
fn tokenize_content(content_lower: &str) -> impl Iterator<Item = &str> {
    content_lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|term| !term.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn doc(id: u32, content: &str) -> Document {
        Document::new(
            id,
            format!("Doc {id}"),
            content,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn empty_collection_builds_empty_index() {
        let index = InvertedIndex::build(&[]);
        assert_eq!(index.term_count(), 0);
        assert!(index.documents_for_term("java").is_empty());
    }

    #[test]
    fn terms_map_to_containing_documents() {
        let docs = vec![doc(1, "java search engine"), doc(2, "python scripting")];
        let index = InvertedIndex::build(&docs);

        assert_eq!(index.documents_for_term("java"), HashSet::from([1]));
        assert_eq!(index.documents_for_term("python"), HashSet::from([2]));
        assert!(index.documents_for_term("rust").is_empty());
    }

    #[test]
    fn shared_terms_map_to_all_containing_documents() {
        let docs = vec![doc(1, "java engine"), doc(2, "python engine")];
        let index = InvertedIndex::build(&docs);

        assert_eq!(index.documents_for_term("engine"), HashSet::from([1, 2]));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let docs = vec![doc(1, "Java Search")];
        let index = InvertedIndex::build(&docs);

        assert_eq!(index.documents_for_term("JAVA"), HashSet::from([1]));
        assert_eq!(index.documents_for_term("Java"), HashSet::from([1]));
    }

    #[test]
    fn punctuation_splits_terms() {
        let docs = vec![doc(1, "search-engine, v2.0!")];
        let index = InvertedIndex::build(&docs);

        assert_eq!(index.documents_for_term("search"), HashSet::from([1]));
        assert_eq!(index.documents_for_term("engine"), HashSet::from([1]));
        assert_eq!(index.documents_for_term("v2"), HashSet::from([1]));
        assert!(index.documents_for_term("search-engine").is_empty());
    }

    #[test]
    fn every_stored_term_has_a_nonempty_posting() {
        let docs = vec![doc(1, "alpha beta"), doc(2, "beta gamma")];
        let index = InvertedIndex::build(&docs);

        for term in ["alpha", "beta", "gamma"] {
            assert!(!index.documents_for_term(term).is_empty());
        }
        assert_eq!(index.term_count(), 3);
    }
}
