// src/consts.rs
//! Shared constants — defaults used when no config overrides them

/// Default `strftime` pattern for parsing and formatting dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default UTC offset for date parsing and formatting (UTC+9, KST)
pub const DEFAULT_UTC_OFFSET_SECONDS: i32 = 9 * 60 * 60;

/// Character that marks "redact this position" in a mask template
pub const DEFAULT_MASK_SYMBOL: char = '*';

/// Separator placed between chunks by `format_blocks`
pub const DEFAULT_BLOCK_SEPARATOR: &str = "-";

/// Characters with special meaning in Markdown
pub const DEFAULT_MARKDOWN_ESCAPING_CHARS: &[&str] = &[
    "\\", "`", "*", "_", "{", "}", "[", "]", "(", ")", "#", "+", "-", ".", "!", "~", "|", ":",
    "<", ">", "&",
];

/// Prefix of generated multipart boundaries
pub const MULTIPART_BOUNDARY_PREFIX: &str = "cheatsheet.boundary.";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CHEATSHEET_CONFIG";
