use crate::consts::{
    DEFAULT_BLOCK_SEPARATOR, DEFAULT_DATE_FORMAT, DEFAULT_MARKDOWN_ESCAPING_CHARS,
    DEFAULT_MASK_SYMBOL, DEFAULT_UTC_OFFSET_SECONDS,
};

pub fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.into()
}

pub fn default_utc_offset_seconds() -> i32 {
    DEFAULT_UTC_OFFSET_SECONDS
}

pub fn default_mask_symbol() -> char {
    DEFAULT_MASK_SYMBOL
}

pub fn default_block_separator() -> String {
    DEFAULT_BLOCK_SEPARATOR.into()
}

pub fn default_escaping_chars() -> Vec<String> {
    DEFAULT_MARKDOWN_ESCAPING_CHARS
        .iter()
        .map(|s| (*s).to_owned())
        .collect()
}
