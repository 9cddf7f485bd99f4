//! Query tokenization and term extraction for sift search.
//!
//! This crate handles the query-string side of the search pipeline:
//!
//! - **Tokenization**: splitting a raw query into whitespace-delimited
//!   tokens while keeping quoted phrases (`"error handling"`) intact
//! - **Term extraction**: pulling the distinct non-operator terms out of a
//!   raw query for scoring
//! - **Phrase extraction**: collecting the quoted phrases in order of
//!   appearance
//!
//! The grammar is deliberately small: `AND`, `OR`, and `NOT` (matched
//! case-insensitively) are the only operators, quotes mark exact phrases,
//! and there is no grouping. Everything in this crate is total — malformed
//! input like an unterminated quote is handled leniently, never rejected.
//!
//! # Example
//!
//! ```
//! use sift_query::tokenize;
//!
//! let tokens = tokenize("java AND \"search engine\" NOT python");
//! assert_eq!(tokens, vec!["java", "AND", "search engine", "NOT", "python"]);
//! ```

#![warn(missing_docs)]

mod lexer;
mod phrase;
mod term;

pub use lexer::tokenize;
pub use phrase::extract_phrases;
pub use term::{extract_terms, is_operator, snippet_term};
