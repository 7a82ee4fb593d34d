//! Template masking and block formatting
//!
//! Lengths are counted in `char`s, never bytes.

use tracing::trace;

/// Apply a fixed-shape `template` to `input`, replacing every position where
/// the template holds `symbol` with `symbol`.
///
/// Non-symbol template positions must agree with the input on whether the
/// character is numeric; any disagreement (or an input shorter than the
/// template) returns `input` unchanged. Input past the template length is
/// dropped.
///
/// ```
/// use cheatsheet::text::mask;
///
/// assert_eq!(mask("010-1234-5678", "000-****-0000", '*'), "010-****-5678");
/// assert_eq!(mask("1234abcd", "****-****", '*'), "1234abcd");
/// ```
pub fn mask(input: &str, template: &str, symbol: char) -> String {
    let template: Vec<char> = template.chars().collect();
    let truncated: Vec<char> = input.chars().take(template.len()).collect();

    if truncated.is_empty() || truncated.len() != template.len() {
        return input.to_owned();
    }

    let mut masked = String::with_capacity(input.len());
    for (i, (&ch, &slot)) in truncated.iter().zip(&template).enumerate() {
        if slot == symbol {
            masked.push(symbol);
            continue;
        }
        if ch.is_numeric() != slot.is_numeric() {
            trace!(position = i, "mask template class mismatch");
            return input.to_owned();
        }
        masked.push(ch);
    }

    masked
}

/// Cut `input` into consecutive chunks of the given sizes joined by `separator`.
///
/// Input beyond the sum of `blocks` is dropped, and no separator follows the
/// chunk that exhausts the input. Oversized blocks take the rest of the input.
pub fn format_blocks(input: &str, blocks: &[usize], separator: &str) -> String {
    let total = blocks.iter().copied().fold(0, usize::saturating_add);
    let chars: Vec<char> = input.chars().take(total).collect();

    let mut result = String::with_capacity(input.len() + blocks.len() * separator.len());
    let mut start: usize = 0;

    for (index, &block) in blocks.iter().enumerate() {
        let end = start.saturating_add(block).min(chars.len());
        result.extend(&chars[start..end]);

        if end == chars.len() {
            break;
        }
        if index + 1 < blocks.len() {
            result.push_str(separator);
        }
        start = end;
    }

    result
}

/// Prefix every occurrence of any token with a backslash.
///
/// A single pass over the input, so inserted backslashes are never escaped a
/// second time. Longer tokens win over shorter ones at the same position.
pub fn escape_characters<S: AsRef<str>>(input: &str, tokens: &[S]) -> String {
    let mut tokens: Vec<&str> = tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let mut escaped = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        match tokens.iter().find(|t| rest.starts_with(**t)) {
            Some(token) => {
                escaped.push('\\');
                escaped.push_str(token);
                rest = &rest[token.len()..];
            }
            None => {
                escaped.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    escaped
}
