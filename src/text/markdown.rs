//! Markdown escaping with clickable URLs

use once_cell::sync::Lazy;
use regex::Regex;

use super::mask::escape_characters;
use crate::config;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Escape Markdown characters in `text` and turn every `http(s)://` URL into
/// a `[url](url)` link.
///
/// URLs are located before escaping and copied verbatim, so escaping `:` or
/// `.` does not break them.
pub fn linkify_markdown_urls<S: AsRef<str>>(text: &str, escaping: &[S]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for url in URL.find_iter(text) {
        out.push_str(&escape_characters(&text[last..url.start()], escaping));
        out.push('[');
        out.push_str(url.as_str());
        out.push_str("](");
        out.push_str(url.as_str());
        out.push(')');
        last = url.end();
    }
    out.push_str(&escape_characters(&text[last..], escaping));

    out
}

/// [`linkify_markdown_urls`] with the configured escaping set
pub fn linkify_markdown_urls_default(text: &str) -> String {
    linkify_markdown_urls(text, &config::load().markdown.escaping_chars)
}
