// tests/mask_tests.rs
use cheatsheet::text::{escape_characters, format_blocks, mask, StrExt};

mod support;
use support::init_tracing;

#[test]
fn test_mask_phone_number_middle_block() {
    init_tracing();
    assert_eq!(mask("010-1234-5678", "000-****-0000", '*'), "010-****-5678");
}

#[test]
fn test_mask_resident_number_tail() {
    init_tracing();
    assert_eq!(mask("240108-1644855", "000000-*******", '*'), "240108-*******");
}

#[test]
fn test_mask_all_symbol_template_masks_everything_but_literals() {
    init_tracing();
    assert_eq!(mask("1234-5678", "****-****", '*'), "****-****");
    assert_eq!(mask("abcd", "****", '*'), "****");
}

#[test]
fn test_mask_class_mismatch_returns_input_unchanged() {
    init_tracing();
    assert_eq!(mask("1234abcd", "****-****", '*'), "1234abcd");
    assert_eq!(mask("010-abcd-5678", "000-0000-0000", '*'), "010-abcd-5678");
    assert_eq!(mask("a10-1234-5678", "000-****-0000", '*'), "a10-1234-5678");
}

#[test]
fn test_mask_empty_input_is_returned_as_is() {
    init_tracing();
    assert_eq!(mask("", "000-****-0000", '*'), "");
}

#[test]
fn test_mask_shorter_input_is_returned_as_is() {
    init_tracing();
    assert_eq!(mask("010-12", "000-****-0000", '*'), "010-12");
    assert_eq!(mask("1", "00", '#'), "1");
}

#[test]
fn test_mask_truncates_input_longer_than_template() {
    init_tracing();
    assert_eq!(mask("010-1234-5678-99", "000-****-0000", '*'), "010-****-5678");
}

#[test]
fn test_mask_empty_template_returns_input() {
    init_tracing();
    assert_eq!(mask("12345", "", '*'), "12345");
}

#[test]
fn test_mask_custom_symbol_and_letter_literals() {
    init_tracing();
    assert_eq!(mask("AB12-9876", "aa00-####", '#'), "AB12-####");
    // '*' is an ordinary non-numeric literal when the symbol is '#'
    assert_eq!(mask("1234", "*###", '#'), "1234");
}

#[test]
fn test_mask_counts_characters_not_bytes() {
    init_tracing();
    assert_eq!(mask("홍길동-1234", "aaa-****", '*'), "홍길동-****");
}

#[test]
fn test_mask_via_str_ext() {
    init_tracing();
    assert_eq!("010-1234-5678".mask("000-****-0000", '*'), "010-****-5678");
}

#[test]
fn test_format_blocks() {
    init_tracing();
    assert_eq!(format_blocks("1234567890", &[3, 2, 4], "-"), "123-45-6789");
    assert_eq!(format_blocks("1234567890", &[3, 2, 4], ":"), "123:45:6789");
    assert_eq!(format_blocks("1234567890", &[5, 5], "-"), "12345-67890");
    assert_eq!(format_blocks("12345", &[3, 2, 4], "-"), "123-45");
    assert_eq!(format_blocks("", &[3, 2, 4], "-"), "");
}

#[test]
fn test_format_blocks_partial_last_chunk_and_no_blocks() {
    init_tracing();
    assert_eq!(format_blocks("1234567", &[3, 2, 4], "-"), "123-45-67");
    assert_eq!(format_blocks("1234", &[], "-"), "");
    assert_eq!("01012345678".format_blocks(&[3, 4, 4], "-"), "010-1234-5678");
}

#[test]
fn test_format_blocks_oversized_blocks_do_not_overflow() {
    init_tracing();
    assert_eq!(format_blocks("abcdef", &[2, usize::MAX], "-"), "ab-cdef");
    assert_eq!(format_blocks("abcdef", &[usize::MAX, usize::MAX], "-"), "abcdef");
    assert_eq!(format_blocks("abcdef", &[usize::MAX, 2], "-"), "abcdef");
}

#[test]
fn test_escape_characters() {
    init_tracing();
    assert_eq!(escape_characters("Hello *world*", &["*"]), "Hello \\*world\\*");
    assert_eq!(
        escape_characters("Special $characters$", &["$", "#"]),
        "Special \\$characters\\$"
    );
    assert_eq!(escape_characters("NoEscapeHere", &["*"]), "NoEscapeHere");
    assert_eq!(escape_characters("", &["*"]), "");
}

#[test]
fn test_escape_characters_does_not_double_escape_backslash() {
    init_tracing();
    assert_eq!(escape_characters("a\\*b", &["*", "\\"]), "a\\\\\\*b");
    assert_eq!(escape_characters("a**b", &["*", "**"]), "a\\**b");
}
