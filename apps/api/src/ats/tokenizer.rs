//! Tokenizer — normalizes free text into lowercase alphanumeric tokens.

use std::collections::HashSet;

/// Splits text into lowercase `[a-z0-9]` tokens in left-to-right order.
///
/// Every character outside `[a-z0-9]` and whitespace becomes a separator, so
/// `"Node.js"` yields `["node", "js"]`. Never fails; empty input gives an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized.split_whitespace().map(String::from).collect()
}

/// Unique tokens of a document, for membership checks only.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
