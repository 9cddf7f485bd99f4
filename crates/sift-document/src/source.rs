//! The document-source boundary.
//!
//! Collections are supplied externally as a JSON array of records with
//! `id`, `title`, `content`, and `date` (ISO 8601) fields. The lowercase
//! content cache is derived during deserialization, so a loaded collection
//! is ready to index as-is.

use std::{fs, path::Path};

use crate::{Document, error::DocumentError};

/// Loads a document collection from a JSON file.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>, DocumentError> {
    let json = fs::read_to_string(path)?;
    parse_documents(&json)
}

/// Parses a document collection from a JSON string.
pub fn parse_documents(json: &str) -> Result<Vec<Document>, DocumentError> {
    Ok(serde_json::from_str(json)?)
}
