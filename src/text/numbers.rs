//! Digit extraction helpers

/// Parse the ASCII digits of `input` as one integer, ignoring everything else.
///
/// `"abc123def"` → `Some(123)`; no digits or overflow → `None`.
pub fn int_value(input: &str) -> Option<i64> {
    let digits = only_numbers(input);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Keep only ASCII digits
pub fn only_numbers(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Drop every numeric character (any script)
pub fn remove_numbers(input: &str) -> String {
    input.chars().filter(|c| !c.is_numeric()).collect()
}
