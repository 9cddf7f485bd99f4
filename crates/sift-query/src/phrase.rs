//! Quoted-phrase extraction from raw query strings.

/// Extracts the phrases that were inside quotes, in order of appearance.
///
/// Phrases are returned with their original casing; callers lowercase them
/// as needed. An unterminated trailing quote contributes nothing here (the
/// phrase never closed), which is intentionally stricter than [`tokenize`]:
/// the phrase bonus only rewards phrases the user actually finished typing.
///
/// [`tokenize`]: crate::tokenize
///
/// # Example
///
/// ```
/// use sift_query::extract_phrases;
///
/// let phrases = extract_phrases("java \"search engine\" NOT python");
/// assert_eq!(phrases, vec!["search engine"]);
/// ```
pub fn extract_phrases(raw: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in raw.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            if !in_quotes && !current.is_empty() {
                phrases.push(std::mem::take(&mut current));
            }
        } else if in_quotes {
            current.push(ch);
        }
    }

    phrases
}
