// src/lib.rs
//! cheatsheet — everyday helpers in one crate
//!
//! Features:
//! - Template masking and block formatting for identifiers
//! - Case-style detection and word splitting
//! - Date parsing and calendar arithmetic (chrono)
//! - JSON bridging and multipart form fields (serde_json)
//! - RSA encrypt/decrypt with base64 framing
//! - Image resize and rotation

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod date;
pub mod enums;
pub mod error;
pub mod imaging;
pub mod json;
pub mod multipart;
pub mod text;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crypto::{decrypt_rsa, encrypt_rsa};
pub use date::{parse_date, DateChange, DateTimeExt};
pub use enums::{CalendarUnit, RsaPadding, TextEncoding};
pub use error::{CheatSheetError, Result};
pub use multipart::{FormFieldSink, MultipartForm};
pub use text::{mask, split_by_case_style, CaseStyle, StrExt};
