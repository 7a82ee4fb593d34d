// src/crypto/mod.rs
//! Thin wrappers over the `rsa` crate — key parsing and padding live there
//!
//! All functions work exclusively on in-memory buffers.

mod rsa;

pub use self::rsa::{decode_base64_lenient, decrypt_rsa, encrypt_rsa};
