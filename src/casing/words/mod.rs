use lazy_static::lazy_static;
use regex::Regex;

use super::CaseBoundary;

lazy_static! {
    /// Matches runs of anything that is not an ASCII letter or digit. Whitespace, hyphens
    /// and underscores are the explicit delimiters; any other punctuation separates words too.
    static ref DELIMITER_RE: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Breaks a text into its normalized word sequence.
///
/// The text is split on every run of non-alphanumeric characters (so `"hello.world"` gives
/// `hello` and `world`) and, under `CaseBoundary::LowerToUpper`, at every lowercase to
/// uppercase transition. Every returned word is non-empty, ASCII alphanumeric and lowercase.
///
/// An empty vector means nothing usable was left; deciding whether that is an error is up
/// to the caller.
pub fn split_words(text: &str, boundary: CaseBoundary) -> Vec<String> {
    let words: Vec<String> = DELIMITER_RE
        .split(text)
        .filter(|chunk| !chunk.is_empty())
        .flat_map(|chunk| match boundary {
            CaseBoundary::Delimiters => vec![chunk],
            CaseBoundary::LowerToUpper => split_at_case_boundaries(chunk),
        })
        .map(|word| word.to_ascii_lowercase())
        .collect();

    tracing::trace!(
        "Split {} bytes of input into {} words",
        text.len(),
        words.len()
    );

    words
}

/// Splits a delimiter-free chunk wherever a lowercase letter is directly followed by an
/// uppercase one. Acronym runs such as `HTTPS` stay together.
fn split_at_case_boundaries(chunk: &str) -> Vec<&str> {
    let mut pieces = vec![];
    let mut start = 0;
    let mut prev_was_lower = false;

    for (idx, c) in chunk.char_indices() {
        if c.is_ascii_uppercase() && prev_was_lower {
            pieces.push(&chunk[start..idx]);
            start = idx;
        }

        prev_was_lower = c.is_ascii_lowercase();
    }

    pieces.push(&chunk[start..]);
    pieces
}
