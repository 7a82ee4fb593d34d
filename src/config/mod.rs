// src/config/mod.rs
//! Configuration system for cheatsheet
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Dates, Formatting, Markdown, Masking};

mod app;
mod defaults;
