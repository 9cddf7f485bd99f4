//! Display-snippet extraction.
//!
//! A snippet is a bounded excerpt of document content centered on the first
//! occurrence of a query term, with `...` markers on whichever sides were
//! clipped. Window offsets are byte-based and snapped outward to character
//! boundaries, which matches a character-counted window exactly for ASCII
//! content and stays panic-free for everything else.

use crate::Document;

/// Bytes of context kept before the match.
const CONTEXT_BEFORE: usize = 30;

/// Bytes of context kept after the match.
const CONTEXT_AFTER: usize = 70;

/// Marker placed on clipped snippet edges.
const ELLIPSIS: &str = "...";

impl Document {
    /// Extracts a display snippet around the first occurrence of
    /// `query_lower` in the content.
    ///
    /// `query_lower` must already be lowercase. If it does not occur, the
    /// snippet is the first `max_len` characters of content, with a
    /// trailing marker when the content was truncated. If it does occur,
    /// the snippet is a window of [`CONTEXT_BEFORE`] bytes before the match
    /// through [`CONTEXT_AFTER`] bytes after it, with markers on whichever
    /// edges did not reach the content's boundaries.
    pub fn snippet(&self, query_lower: &str, max_len: usize) -> String {
        let content = self.content();

        let Some(start) = self.content_lower().find(query_lower) else {
            return head_snippet(content, max_len);
        };

        let window_start = floor_boundary(content, start.saturating_sub(CONTEXT_BEFORE));
        let window_end = ceil_boundary(content, start + query_lower.len() + CONTEXT_AFTER);

        let mut snippet = String::new();
        if window_start > 0 {
            snippet.push_str(ELLIPSIS);
        }
        snippet.push_str(&content[window_start..window_end]);
        if window_end < content.len() {
            snippet.push_str(ELLIPSIS);
        }
        snippet
    }
}

/// Returns the first `max_len` characters of content, marking truncation.
fn head_snippet(content: &str, max_len: usize) -> String {
    if content.chars().count() <= max_len {
        return content.to_string();
    }

    let mut snippet: String = content.chars().take(max_len).collect();
    snippet.push_str(ELLIPSIS);
    snippet
}

/// Clamps `index` into `s` and moves it down to a char boundary.
fn floor_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Clamps `index` into `s` and moves it up to a char boundary.
fn ceil_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
