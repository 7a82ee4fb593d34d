// src/date/mod.rs
//! Date parsing, formatting and calendar arithmetic on top of chrono

mod calendar;
mod parse;

pub use calendar::{is_today, DateChange, DateTimeExt};
pub use parse::{format_date, format_date_default, parse_date, parse_date_default};
