//! Method-call sugar over the free functions in [`crate::text`]

use chrono::{DateTime, FixedOffset};

use super::{affix, case_style, markdown, mask, numbers, verify, CaseStyle};
use crate::date;
use crate::enums::TextEncoding;

/// Extension methods on `str`
///
/// ```
/// use cheatsheet::text::StrExt;
///
/// assert_eq!("240108-1644855".mask("000000-*******", '*'), "240108-*******");
/// assert_eq!("SPLIT_AND_NORMALIZE".split_by_case_style(), ["split", "and", "normalize"]);
/// assert_eq!("HelloWorld".remove_any_suffix(["Swift", "World"]), "Hello");
/// ```
pub trait StrExt {
    fn mask(&self, template: &str, symbol: char) -> String;
    fn format_blocks(&self, blocks: &[usize], separator: &str) -> String;
    fn escape_characters<S: AsRef<str>>(&self, tokens: &[S]) -> String;
    fn linkify_markdown_urls<S: AsRef<str>>(&self, escaping: &[S]) -> String;

    fn case_style(&self) -> Option<CaseStyle>;
    fn split_by_case_style(&self) -> Vec<String>;

    fn slice(&self, n: usize) -> &str;
    fn remove_suffix(&self, suffix: &str) -> &str;
    fn remove_prefix(&self, prefix: &str) -> &str;
    fn remove_last(&self, n: usize) -> &str;
    fn remove_first(&self, n: usize) -> &str;
    fn remove_any_suffix<I, S>(&self, suffixes: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
    fn remove_any_prefix<I, S>(&self, prefixes: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    fn int_value(&self) -> Option<i64>;
    fn only_numbers(&self) -> String;
    fn remove_numbers(&self) -> String;

    fn is_existing(&self) -> bool;
    fn matches_pattern(&self, pattern: &str) -> bool;
    fn is_included_in<I, S>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
    fn includes_any<I, S>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Encode into `encoding`; `None` if some character is not representable
    fn to_bytes_in(&self, encoding: TextEncoding) -> Option<Vec<u8>>;
    fn to_date(&self, format: &str, utc_offset_seconds: i32) -> Option<DateTime<FixedOffset>>;
}

impl StrExt for str {
    fn mask(&self, template: &str, symbol: char) -> String {
        mask::mask(self, template, symbol)
    }

    fn format_blocks(&self, blocks: &[usize], separator: &str) -> String {
        mask::format_blocks(self, blocks, separator)
    }

    fn escape_characters<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        mask::escape_characters(self, tokens)
    }

    fn linkify_markdown_urls<S: AsRef<str>>(&self, escaping: &[S]) -> String {
        markdown::linkify_markdown_urls(self, escaping)
    }

    fn case_style(&self) -> Option<CaseStyle> {
        CaseStyle::detect(self)
    }

    fn split_by_case_style(&self) -> Vec<String> {
        case_style::split_by_case_style(self)
    }

    fn slice(&self, n: usize) -> &str {
        affix::slice(self, n)
    }

    fn remove_suffix(&self, suffix: &str) -> &str {
        affix::remove_suffix(self, suffix)
    }

    fn remove_prefix(&self, prefix: &str) -> &str {
        affix::remove_prefix(self, prefix)
    }

    fn remove_last(&self, n: usize) -> &str {
        affix::remove_last(self, n)
    }

    fn remove_first(&self, n: usize) -> &str {
        affix::remove_first(self, n)
    }

    fn remove_any_suffix<I, S>(&self, suffixes: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        affix::remove_any_suffix(self, suffixes)
    }

    fn remove_any_prefix<I, S>(&self, prefixes: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        affix::remove_any_prefix(self, prefixes)
    }

    fn int_value(&self) -> Option<i64> {
        numbers::int_value(self)
    }

    fn only_numbers(&self) -> String {
        numbers::only_numbers(self)
    }

    fn remove_numbers(&self) -> String {
        numbers::remove_numbers(self)
    }

    fn is_existing(&self) -> bool {
        verify::is_existing(self)
    }

    fn matches_pattern(&self, pattern: &str) -> bool {
        verify::matches_pattern(self, pattern)
    }

    fn is_included_in<I, S>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        verify::is_included_in(self, words)
    }

    fn includes_any<I, S>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        verify::includes_any(self, words)
    }

    fn to_bytes_in(&self, encoding: TextEncoding) -> Option<Vec<u8>> {
        match encoding {
            TextEncoding::Utf8 => Some(self.as_bytes().to_vec()),
            TextEncoding::Ascii => self.is_ascii().then(|| self.as_bytes().to_vec()),
            TextEncoding::Latin1 => self
                .chars()
                .map(|c| u8::try_from(u32::from(c)).ok())
                .collect(),
        }
    }

    fn to_date(&self, format: &str, utc_offset_seconds: i32) -> Option<DateTime<FixedOffset>> {
        date::parse_date(self, format, utc_offset_seconds)
    }
}
