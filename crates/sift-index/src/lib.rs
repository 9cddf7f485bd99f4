//! Inverted index, boolean evaluation, and scoring for sift.
//!
//! This crate is the query-evaluation core. [`SearchEngine`] owns an
//! immutable document collection and an [`InvertedIndex`] built from it
//! once at construction; each [`SearchEngine::search`] call runs the full
//! pipeline: boolean evaluation over the index, additive scoring, snippet
//! extraction, and a stable sort.
//!
//! Everything here is total over arbitrary query strings — empty queries,
//! operator-only queries, and unknown terms all degrade to empty results
//! rather than errors.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sift_document::Document;
//! use sift_index::SearchEngine;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let engine = SearchEngine::new(vec![
//!     Document::new(1, "One", "java search engine", date),
//!     Document::new(2, "Two", "python scripting", date),
//! ]);
//!
//! let results = engine.search("java AND search", false);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].document.id(), 1);
//! ```

#![warn(missing_docs)]

mod engine;
mod evaluate;
mod index;
mod score;

pub use engine::{SearchEngine, SearchResult};
pub use evaluate::evaluate;
pub use index::InvertedIndex;
pub use score::score;
