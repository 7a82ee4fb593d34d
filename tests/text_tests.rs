// tests/text_tests.rs
use cheatsheet::consts::DEFAULT_MARKDOWN_ESCAPING_CHARS;
use cheatsheet::text::{linkify_markdown_urls, StrExt};
use cheatsheet::TextEncoding;

mod support;
use support::init_tracing;

#[test]
fn test_int_value() {
    init_tracing();
    assert_eq!("abc123def".int_value(), Some(123));
    assert_eq!("123".int_value(), Some(123));
    assert_eq!("0abc456".int_value(), Some(456));
    assert_eq!("abcdef".int_value(), None);
    assert_eq!("".int_value(), None);
    assert_eq!("00123".int_value(), Some(123));
    assert_eq!("99999999999999999999".int_value(), None);
}

#[test]
fn test_only_numbers_and_remove_numbers() {
    init_tracing();
    assert_eq!("abc123def".only_numbers(), "123");
    assert_eq!("0abc456".only_numbers(), "0456");
    assert_eq!("abcdef".only_numbers(), "");
    assert_eq!("".only_numbers(), "");

    assert_eq!("abc123def".remove_numbers(), "abcdef");
    assert_eq!("123".remove_numbers(), "");
    assert_eq!("0abc456".remove_numbers(), "abc");
    assert_eq!("".remove_numbers(), "");
}

#[test]
fn test_slice() {
    init_tracing();
    assert_eq!("Hello, world!".slice(5), "Hello");
    assert_eq!("Hello, world!".slice(20), "Hello, world!");
    assert_eq!("".slice(5), "");
    assert_eq!("안녕하세요".slice(2), "안녕");
}

#[test]
fn test_remove_suffix_and_prefix() {
    init_tracing();
    assert_eq!("HelloWorld".remove_suffix("World"), "Hello");
    assert_eq!("HelloWorld".remove_suffix("Swift"), "HelloWorld");
    assert_eq!("".remove_suffix("Test"), "");
    assert_eq!("___".remove_suffix("_"), "__");

    assert_eq!("HelloWorld".remove_prefix("Hello"), "World");
    assert_eq!("HelloWorld".remove_prefix("Swift"), "HelloWorld");
    assert_eq!("".remove_prefix("Test"), "");
    assert_eq!("Hello".remove_prefix("HelloWorld"), "Hello");
}

#[test]
fn test_remove_any_suffix_and_prefix() {
    init_tracing();
    assert_eq!("HelloWorld".remove_any_suffix(["World", "Swift"]), "Hello");
    assert_eq!("HelloWorld".remove_any_suffix(["Swift", "World"]), "Hello");
    assert_eq!("HelloWorld".remove_any_suffix(["Universe"]), "HelloWorld");
    assert_eq!("".remove_any_suffix(["Test"]), "");

    assert_eq!("HelloWorld".remove_any_prefix(["Hello", "Hi"]), "World");
    assert_eq!("HelloWorld".remove_any_prefix(vec!["Hi".to_string(), "Hello".to_string()]), "World");
    assert_eq!("HelloWorld".remove_any_prefix(["Swift"]), "HelloWorld");
    assert_eq!("".remove_any_prefix(["Test"]), "");
}

#[test]
fn test_remove_last_and_first_counts() {
    init_tracing();
    assert_eq!("Hello".remove_last(1), "Hell");
    assert_eq!("Hello".remove_last(5), "");
    assert_eq!("Hello".remove_last(9), "");
    assert_eq!("Hello".remove_first(2), "llo");
    assert_eq!("Hello".remove_first(5), "");
    assert_eq!("héllo".remove_first(2), "llo");
}

#[test]
fn test_is_existing() {
    init_tracing();
    assert!("Hello".is_existing());
    assert!(!"".is_existing());
}

#[test]
fn test_matches_pattern() {
    init_tracing();
    let pattern = "^010-[0-9]{4}-[0-9]{4}$";
    assert!("010-1234-5678".matches_pattern(pattern));
    assert!(!"123-4567-8901".matches_pattern(pattern));
    // whole-string semantics without explicit anchors
    assert!("abc".matches_pattern("[a-c]+"));
    assert!(!"abcd".matches_pattern("[a-c]+"));
    assert!(!"anything".matches_pattern("(unclosed"));
}

#[test]
fn test_is_included_in() {
    init_tracing();
    assert!("Hello".is_included_in(["Hello", "World"]));
    assert!(!"Hello".is_included_in(["Hi", "World"]));
    assert!("hello".is_included_in(["Say HELLO there"]));
    assert!(!"".is_included_in(["", ""]));
}

#[test]
fn test_empty_input_is_never_included() {
    init_tracing();
    assert!(!"".is_included_in(["abc"]));
    assert!(!"".is_included_in(["abc", ""]));
}

#[test]
fn test_includes_any() {
    init_tracing();
    let content = "The quick brown fox jumps over the lazy dog.";
    assert!(content.includes_any(["quick", "lazy"]));
    assert!(!content.includes_any(["cat", "developer"]));
    assert!(content.includes_any(vec!["QUICK"]));
    assert!(!content.includes_any([""]));
}

#[test]
fn test_to_bytes_in() {
    init_tracing();
    assert_eq!("Hello, World!".to_bytes_in(TextEncoding::Utf8), Some(b"Hello, World!".to_vec()));
    assert_eq!("Hello, ASCII!".to_bytes_in(TextEncoding::Ascii), Some(b"Hello, ASCII!".to_vec()));
    assert_eq!("Hello 😊".to_bytes_in(TextEncoding::Ascii), None);
    assert_eq!("café".to_bytes_in(TextEncoding::Latin1), Some(vec![b'c', b'a', b'f', 0xE9]));
    assert_eq!("こんにちは".to_bytes_in(TextEncoding::Latin1), None);
    assert_eq!("".to_bytes_in(TextEncoding::Utf8), Some(Vec::new()));
}

#[test]
fn test_linkify_markdown_urls_keeps_urls_intact() {
    init_tracing();
    let text = "See https://example.com/a_b now!";
    assert_eq!(
        linkify_markdown_urls(text, DEFAULT_MARKDOWN_ESCAPING_CHARS),
        "See [https://example.com/a_b](https://example.com/a_b) now\\!"
    );
}

#[test]
fn test_linkify_markdown_urls_without_urls_only_escapes() {
    init_tracing();
    assert_eq!(
        "*bold* and [x]".linkify_markdown_urls(&["*", "[", "]"]),
        "\\*bold\\* and \\[x\\]"
    );
    assert_eq!(
        linkify_markdown_urls("http://a.b and http://c.d", &["."]),
        "[http://a.b](http://a.b) and [http://c.d](http://c.d)"
    );
}
