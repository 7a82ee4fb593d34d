//! Prefix/suffix trimming and character slicing

/// First `n` characters of `input`
pub fn slice(input: &str, n: usize) -> &str {
    match input.char_indices().nth(n) {
        Some((byte, _)) => &input[..byte],
        None => input,
    }
}

/// Remove `suffix` once if present
pub fn remove_suffix<'a>(input: &'a str, suffix: &str) -> &'a str {
    input.strip_suffix(suffix).unwrap_or(input)
}

/// Remove `prefix` once if present
pub fn remove_prefix<'a>(input: &'a str, prefix: &str) -> &'a str {
    input.strip_prefix(prefix).unwrap_or(input)
}

/// Drop the last `n` characters; empty when `input` is not longer than `n`
pub fn remove_last(input: &str, n: usize) -> &str {
    let len = input.chars().count();
    if len <= n {
        return "";
    }
    slice(input, len - n)
}

/// Drop the first `n` characters; empty when `input` is not longer than `n`
pub fn remove_first(input: &str, n: usize) -> &str {
    match input.char_indices().nth(n) {
        Some((byte, _)) => &input[byte..],
        None => "",
    }
}

/// Remove the first suffix in `suffixes` that `input` ends with
pub fn remove_any_suffix<'a, I, S>(input: &'a str, suffixes: I) -> &'a str
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suffixes
        .into_iter()
        .find_map(|suffix| input.strip_suffix(suffix.as_ref()))
        .unwrap_or(input)
}

/// Remove the first prefix in `prefixes` that `input` starts with
pub fn remove_any_prefix<'a, I, S>(input: &'a str, prefixes: I) -> &'a str
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prefixes
        .into_iter()
        .find_map(|prefix| input.strip_prefix(prefix.as_ref()))
        .unwrap_or(input)
}
