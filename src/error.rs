// src/error.rs
//! Public error type for the entire crate
//!
//! The text helpers in [`crate::text`] never fail; everything that wraps an
//! external collaborator (JSON, RSA, images, config) reports through here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheatSheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("could not parse RSA {0} key")]
    KeyParse(&'static str),

    #[error("decrypted data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CheatSheetError>;
