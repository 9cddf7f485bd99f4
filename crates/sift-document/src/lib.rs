//! Document model and snippet extraction for sift.
//!
//! A [`Document`] is an immutable searchable record: numeric id, title,
//! content, and a calendar date. The content's lowercase form is computed
//! once at construction and cached, so every case-insensitive containment
//! check downstream is a plain substring test.
//!
//! This crate also owns the document-source boundary: [`load_documents`]
//! reads a collection from a JSON array, and [`parse_documents`] does the
//! same from an in-memory string.

#![warn(missing_docs)]

mod error;
mod snippet;
mod source;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use error::DocumentError;
pub use source::{load_documents, parse_documents};

/// An immutable searchable document.
///
/// Identity is the numeric id: wherever documents participate in set
/// algebra, the sets hold ids, never references. Fields are private so the
/// cached lowercase content can never drift from the content it was derived
/// from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    /// Unique document identifier.
    id: u32,
    /// Display title.
    title: String,
    /// Full searchable text.
    content: String,
    /// Publication date, used as an optional sort tiebreak.
    date: NaiveDate,
    /// Lowercase form of `content`, derived once at construction.
    #[serde(skip_serializing)]
    content_lower: String,
}

/// Wire form of a document, before the lowercase cache exists.
#[derive(Debug, Deserialize)]
struct RawDocument {
    /// Unique document identifier.
    id: u32,
    /// Display title.
    title: String,
    /// Full searchable text.
    content: String,
    /// Publication date.
    date: NaiveDate,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::new(raw.id, raw.title, raw.content, raw.date)
    }
}

impl Document {
    /// Creates a document, deriving the cached lowercase content.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        content: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let content = content.into();
        let content_lower = content.to_lowercase();
        Self {
            id,
            title: title.into(),
            content,
            date,
            content_lower,
        }
    }

    /// Returns the document id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the full content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the publication date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the cached lowercase content.
    pub fn content_lower(&self) -> &str {
        &self.content_lower
    }

    /// Returns true if the content contains the given term.
    ///
    /// `term_lower` must already be lowercase. This is a plain substring
    /// test, not word-boundary matching: "cat" matches inside "category".
    pub fn contains_term(&self, term_lower: &str) -> bool {
        self.content_lower.contains(term_lower)
    }

    /// Returns true if the content contains the given phrase.
    ///
    /// `phrase_lower` must already be lowercase. Phrases bypass the index
    /// entirely, so this is the same substring test as [`contains_term`].
    ///
    /// [`contains_term`]: Self::contains_term
    pub fn contains_phrase(&self, phrase_lower: &str) -> bool {
        self.content_lower.contains(phrase_lower)
    }
}
