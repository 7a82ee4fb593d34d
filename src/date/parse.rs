//! String ⇄ date conversion at a fixed UTC offset

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::Write as _;
use tracing::debug;

use crate::config;

/// Parse `input` with a chrono `strftime` `format` as wall-clock time at
/// `utc_offset_seconds` east of UTC.
///
/// Date-only formats yield midnight. Returns `None` when the input does not
/// fit the format or the offset is out of range.
pub fn parse_date(input: &str, format: &str, utc_offset_seconds: i32) -> Option<DateTime<FixedOffset>> {
    let Some(offset) = FixedOffset::east_opt(utc_offset_seconds) else {
        debug!(utc_offset_seconds, "offset out of range");
        return None;
    };

    let naive = NaiveDateTime::parse_from_str(input, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;

    offset.from_local_datetime(&naive).single()
}

/// [`parse_date`] with the configured format and offset
pub fn parse_date_default(input: &str) -> Option<DateTime<FixedOffset>> {
    let dates = &config::load().dates;
    parse_date(input, &dates.format, dates.utc_offset_seconds)
}

/// Render `value` as wall-clock time at `utc_offset_seconds`.
///
/// Returns `None` for an out-of-range offset or a malformed format string.
pub fn format_date<Tz: TimeZone>(
    value: &DateTime<Tz>,
    format: &str,
    utc_offset_seconds: i32,
) -> Option<String> {
    let offset = FixedOffset::east_opt(utc_offset_seconds)?;
    format_naive(&value.with_timezone(&offset).naive_local(), format)
}

/// [`format_date`] with the configured format and offset
pub fn format_date_default<Tz: TimeZone>(value: &DateTime<Tz>) -> Option<String> {
    let dates = &config::load().dates;
    format_date(value, &dates.format, dates.utc_offset_seconds)
}

pub(crate) fn format_naive(value: &NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    // chrono reports bad specifiers as a fmt::Error
    if write!(out, "{}", value.format(format)).is_err() {
        debug!(%format, "invalid date format");
        return None;
    }
    Some(out)
}
