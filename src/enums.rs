// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the small closed sets of user-visible choices:
//! calendar units, text encodings and RSA padding schemes.

use serde::{Deserialize, Serialize};

/// Calendar fields used by the date helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    /// 1 = Sunday … 7 = Saturday
    Weekday,
}

/// Byte encodings supported by `StrExt::to_bytes_in`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    /// ISO-8859-1
    Latin1,
}

/// RSA encryption padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum RsaPadding {
    #[default]
    Pkcs1v15,
    OaepSha256,
}
