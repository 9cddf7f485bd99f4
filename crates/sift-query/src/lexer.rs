//! Query lexer (tokenizer).
//!
//! Converts a query string into an ordered token sequence. Operator
//! keywords are ordinary tokens at this stage; classification happens in
//! the evaluator. A token containing whitespace can only have come from a
//! quoted phrase, which is how downstream code tells phrases apart from
//! bare terms.

/// Tokenizes a query string, keeping quoted phrases as single tokens.
///
/// A `"` toggles quote mode. Inside quotes every character, whitespace
/// included, joins the current token; the closing quote flushes it. Outside
/// quotes, whitespace is a token boundary. An empty quoted phrase (`""`)
/// yields no token.
///
/// An unterminated quote is not an error: the rest of the input is consumed
/// as if still inside the phrase and flushed as the final token. Consumers
/// rely on this leniency, so it must not be tightened into a parse failure.
///
/// # Example
///
/// ```
/// use sift_query::tokenize;
///
/// let tokens = tokenize("java AND \"search engine\"");
/// assert_eq!(tokens, vec!["java", "AND", "search engine"]);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in raw.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            if !in_quotes && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }

        if in_quotes {
            // Inside quotes, keep everything (including whitespace).
            current.push(ch);
        } else if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
