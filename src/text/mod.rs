// src/text/mod.rs
//! Pure string helpers — no I/O, no shared state
//!
//! Nothing in here returns an error: malformed input comes back unchanged
//! (masking, trimming) or as an empty result (case splitting).

pub mod affix;
pub mod case_style;
mod ext;
pub mod markdown;
pub mod mask;
pub mod numbers;
pub mod verify;

pub use case_style::{
    split_by_case_style, BoundaryRule, BoundarySplitter, CaseStyle, LiteralSplitter, WordSplitter,
};
pub use ext::StrExt;
pub use markdown::{linkify_markdown_urls, linkify_markdown_urls_default};
pub use mask::{escape_characters, format_blocks, mask};
