//! Presence, pattern and containment checks

use regex::Regex;
use tracing::debug;

pub fn is_existing(input: &str) -> bool {
    !input.is_empty()
}

/// Whole-string regex match. An invalid pattern never matches.
pub fn matches_pattern(input: &str, pattern: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => re.is_match(input),
        Err(err) => {
            debug!(%pattern, error = %err, "invalid pattern");
            false
        }
    }
}

/// Is `input` a case-insensitive substring of any non-empty word?
///
/// An empty `input` is never included.
pub fn is_included_in<I, S>(input: &str, words: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !is_existing(input) {
        return false;
    }
    let needle = input.to_lowercase();
    words
        .into_iter()
        .filter(|word| is_existing(word.as_ref()))
        .any(|word| word.as_ref().to_lowercase().contains(&needle))
}

/// Does `input` contain any non-empty word, ignoring case?
pub fn includes_any<I, S>(input: &str, words: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let haystack = input.to_lowercase();
    words
        .into_iter()
        .filter(|word| is_existing(word.as_ref()))
        .any(|word| haystack.contains(&word.as_ref().to_lowercase()))
}
