//! Naming-convention detection and word splitting
//!
//! Six styles are tried in a fixed order; the first whose whole-string
//! pattern matches decides how the input is cut into words. The order is
//! significant: a bare lowercase word such as `"split"` is valid snake,
//! camel, kebab and dot case at once, and resolves to snake.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A multi-word identifier convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStyle {
    /// `snake_case`
    Snake,
    /// `camelCase`
    Camel,
    /// `kebab-case`
    Kebab,
    /// `PascalCase`
    Pascal,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `dot.case`
    Dot,
}

impl CaseStyle {
    /// Every style, in detection priority order
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Snake,
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::Pascal,
        CaseStyle::ScreamingSnake,
        CaseStyle::Dot,
    ];

    /// Whole-string recognition pattern
    pub fn pattern(self) -> &'static str {
        match self {
            CaseStyle::Snake => r"^[a-z0-9]+(?:_[a-z0-9]+)*$",
            CaseStyle::Camel => r"^[a-z0-9]+(?:[A-Z][a-z0-9]*)*$",
            CaseStyle::Kebab => r"^[a-z0-9]+(?:-[a-z0-9]+)*$",
            CaseStyle::Pascal => r"^[A-Z][a-z0-9]*(?:[A-Z][a-z0-9]*)*$",
            CaseStyle::ScreamingSnake => r"^[A-Z0-9]+(?:_[A-Z0-9]+)*$",
            CaseStyle::Dot => r"^[a-z0-9]+(?:\.[a-z0-9]+)*$",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Does `input` as a whole follow this style?
    pub fn matches(self, input: &str) -> bool {
        RECOGNIZERS[self.index()].is_match(input)
    }

    /// First style in priority order that recognises `input`
    pub fn detect(input: &str) -> Option<CaseStyle> {
        Self::ALL.into_iter().find(|style| style.matches(input))
    }

    /// How words are separated in this style
    pub fn splitter(self) -> &'static dyn WordSplitter {
        match self {
            CaseStyle::Snake | CaseStyle::ScreamingSnake => &UNDERSCORE,
            CaseStyle::Kebab => &HYPHEN,
            CaseStyle::Dot => &DOT,
            CaseStyle::Camel => &CAMEL_HUMPS,
            CaseStyle::Pascal => &PASCAL_HUMPS,
        }
    }

    /// Split `input` with this style's separator rule and lowercase every word.
    ///
    /// Does not check that `input` actually follows the style.
    pub fn split_and_normalize(self, input: &str) -> Vec<String> {
        self.splitter()
            .split_words(input)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect()
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Snake => "snake_case",
            CaseStyle::Camel => "camelCase",
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::Pascal => "PascalCase",
            CaseStyle::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            CaseStyle::Dot => "dot.case",
        };
        f.write_str(name)
    }
}

static RECOGNIZERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CaseStyle::ALL
        .iter()
        .map(|style| Regex::new(style.pattern()).expect("case style pattern is valid"))
        .collect()
});

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z0-9])").expect("camel boundary pattern is valid"));

/// Cuts an identifier into raw (not yet lowercased) words
pub trait WordSplitter: Send + Sync {
    fn split_words(&self, input: &str) -> Vec<String>;
}

/// Splits on one literal separator character, dropping empty fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSplitter(pub char);

impl WordSplitter for LiteralSplitter {
    fn split_words(&self, input: &str) -> Vec<String> {
        input
            .split(self.0)
            .filter(|word| !word.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Where a [`BoundarySplitter`] inserts word breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Between a lowercase letter or digit and a following uppercase letter
    /// or digit. Matches never overlap, so `"a1B"` breaks only once.
    CamelHump,
    /// Zero-width breaks before each capitalised run and around letter/non-letter changes.
    PascalHump,
}

/// Inserts a space at every boundary, then splits on whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundarySplitter(pub BoundaryRule);

impl BoundarySplitter {
    fn insert_breaks(&self, input: &str) -> String {
        match self.0 {
            BoundaryRule::CamelHump => CAMEL_BOUNDARY.replace_all(input, "${1} ${2}").into_owned(),
            BoundaryRule::PascalHump => insert_pascal_breaks(input),
        }
    }
}

impl WordSplitter for BoundarySplitter {
    fn split_words(&self, input: &str) -> Vec<String> {
        self.insert_breaks(input)
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }
}

static UNDERSCORE: LiteralSplitter = LiteralSplitter('_');
static HYPHEN: LiteralSplitter = LiteralSplitter('-');
static DOT: LiteralSplitter = LiteralSplitter('.');
static CAMEL_HUMPS: BoundarySplitter = BoundarySplitter(BoundaryRule::CamelHump);
static PASCAL_HUMPS: BoundarySplitter = BoundarySplitter(BoundaryRule::PascalHump);

fn is_ascii_letter(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_ascii_upper(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_uppercase())
}

fn is_ascii_lower(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c.is_ascii_lowercase())
}

/// A break at `p` sits between `chars[p - 1]` and `chars[p]`.
fn is_pascal_break(chars: &[char], p: usize) -> bool {
    let prev = chars.get(p - 1).copied();
    let here = chars.get(p).copied();
    let next = chars.get(p + 1).copied();

    // "HTTPServer": break before the 'S' that opens "Server"
    let acronym_end = is_ascii_upper(prev) && is_ascii_upper(here) && is_ascii_lower(next);
    let hump = prev.is_some() && !is_ascii_upper(prev) && is_ascii_upper(here);
    let leaves_letters = is_ascii_letter(prev) && here.is_some() && !is_ascii_letter(here);

    acronym_end || hump || leaves_letters
}

fn insert_pascal_breaks(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + chars.len() / 2);

    for (p, &ch) in chars.iter().enumerate() {
        if p > 0 && is_pascal_break(&chars, p) {
            out.push(' ');
        }
        out.push(ch);
    }

    out
}

/// Detect the case style of `input` and split it into lowercase words.
///
/// Returns an empty vector when no style recognises the input (including
/// the empty string).
///
/// ```
/// use cheatsheet::text::split_by_case_style;
///
/// assert_eq!(split_by_case_style("splitAndNormalize"), ["split", "and", "normalize"]);
/// assert!(split_by_case_style("----").is_empty());
/// ```
pub fn split_by_case_style(input: &str) -> Vec<String> {
    match CaseStyle::detect(input) {
        Some(style) => style.split_and_normalize(input),
        None => Vec::new(),
    }
}
