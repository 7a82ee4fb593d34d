//! Calendar arithmetic on wall-clock date-times
//!
//! Everything operates on `NaiveDateTime`; attach an offset with
//! [`super::parse_date`] / [`super::format_date`] at the edges.

use chrono::{
    DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike,
};
use tracing::debug;

use super::parse::format_naive;
use crate::enums::CalendarUnit;

/// Fields to override in [`DateTimeExt::change`]; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateChange {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

pub trait DateTimeExt: Sized {
    /// Same date at 00:00:00
    fn start_of_day(&self) -> Self;
    /// Same date at 23:59:59
    fn end_of_day(&self) -> Self;
    /// 1 = Sunday … 7 = Saturday
    fn weekday_index(&self) -> u32;
    /// Midnight on the 1st of the same month
    fn first_date_of_month(&self) -> Self;
    fn first_weekday_of_month(&self) -> u32;
    fn format_with(&self, format: &str) -> Option<String>;
    fn component(&self, unit: CalendarUnit) -> i64;
    fn is_same_day(&self, other: &Self) -> bool;
    fn is_in_same_month(&self, other: &Self) -> bool;
    /// Whole `unit`s elapsed from `other` to `self`, truncated toward zero
    fn between(&self, other: &Self, unit: CalendarUnit) -> Option<i64>;
    /// How many `unit`s fit in the `base` containing `self`, e.g. days in this month
    fn number_of(&self, unit: CalendarUnit, base: CalendarUnit) -> Option<u32>;
    /// Move forward by `value` units; month and year steps clamp the day to the month's end
    fn after(&self, value: i64, unit: CalendarUnit) -> Option<Self>;
    fn before(&self, value: i64, unit: CalendarUnit) -> Option<Self>;
    /// Replace the given fields; an impossible result leaves `self` unchanged
    fn change(&self, change: DateChange) -> Self;
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

fn month_ordinal(value: &NaiveDateTime) -> i64 {
    i64::from(value.year()) * 12 + i64::from(value.month0())
}

fn add_months(value: &NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        value.checked_add_months(magnitude)
    } else {
        value.checked_sub_months(magnitude)
    }
}

fn whole_months_between(from: &NaiveDateTime, to: &NaiveDateTime) -> Option<i64> {
    let mut months = month_ordinal(to) - month_ordinal(from);
    let landed = add_months(from, months)?;
    if months > 0 && landed > *to {
        months -= 1;
    } else if months < 0 && landed < *to {
        months += 1;
    }
    Some(months)
}

impl DateTimeExt for NaiveDateTime {
    fn start_of_day(&self) -> Self {
        self.date().and_time(NaiveTime::MIN)
    }

    fn end_of_day(&self) -> Self {
        self.change(DateChange {
            hour: Some(23),
            minute: Some(59),
            second: Some(59),
            ..DateChange::default()
        })
    }

    fn weekday_index(&self) -> u32 {
        self.weekday().number_from_sunday()
    }

    fn first_date_of_month(&self) -> Self {
        NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
            .unwrap_or(self.date())
            .and_time(NaiveTime::MIN)
    }

    fn first_weekday_of_month(&self) -> u32 {
        self.first_date_of_month().weekday_index()
    }

    fn format_with(&self, format: &str) -> Option<String> {
        format_naive(self, format)
    }

    fn component(&self, unit: CalendarUnit) -> i64 {
        match unit {
            CalendarUnit::Year => i64::from(self.year()),
            CalendarUnit::Month => i64::from(self.month()),
            CalendarUnit::Day => i64::from(self.day()),
            CalendarUnit::Hour => i64::from(self.hour()),
            CalendarUnit::Minute => i64::from(self.minute()),
            CalendarUnit::Second => i64::from(self.second()),
            CalendarUnit::Weekday => i64::from(self.weekday_index()),
        }
    }

    fn is_same_day(&self, other: &Self) -> bool {
        self.date() == other.date()
    }

    fn is_in_same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    fn between(&self, other: &Self, unit: CalendarUnit) -> Option<i64> {
        let elapsed = self.signed_duration_since(*other);
        match unit {
            CalendarUnit::Year => whole_months_between(other, self).map(|m| m / 12),
            CalendarUnit::Month => whole_months_between(other, self),
            CalendarUnit::Day => Some(elapsed.num_days()),
            CalendarUnit::Hour => Some(elapsed.num_hours()),
            CalendarUnit::Minute => Some(elapsed.num_minutes()),
            CalendarUnit::Second => Some(elapsed.num_seconds()),
            CalendarUnit::Weekday => None,
        }
    }

    fn number_of(&self, unit: CalendarUnit, base: CalendarUnit) -> Option<u32> {
        use CalendarUnit::*;
        match (unit, base) {
            (Day, Month) => days_in_month(self.year(), self.month()),
            (Day, Year) => Some(if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() {
                366
            } else {
                365
            }),
            (Month, Year) => Some(12),
            (Hour, Day) => Some(24),
            (Minute, Hour) => Some(60),
            (Second, Minute) => Some(60),
            _ => None,
        }
    }

    fn after(&self, value: i64, unit: CalendarUnit) -> Option<Self> {
        if value == 0 {
            return Some(*self);
        }
        let delta = match unit {
            CalendarUnit::Year => return add_months(self, value.checked_mul(12)?),
            CalendarUnit::Month => return add_months(self, value),
            CalendarUnit::Day | CalendarUnit::Weekday => TimeDelta::try_days(value)?,
            CalendarUnit::Hour => TimeDelta::try_hours(value)?,
            CalendarUnit::Minute => TimeDelta::try_minutes(value)?,
            CalendarUnit::Second => TimeDelta::try_seconds(value)?,
        };
        self.checked_add_signed(delta)
    }

    fn before(&self, value: i64, unit: CalendarUnit) -> Option<Self> {
        self.after(value.checked_neg()?, unit)
    }

    fn change(&self, change: DateChange) -> Self {
        let date = NaiveDate::from_ymd_opt(
            change.year.unwrap_or(self.year()),
            change.month.unwrap_or(self.month()),
            change.day.unwrap_or(self.day()),
        );
        let time = NaiveTime::from_hms_opt(
            change.hour.unwrap_or(self.hour()),
            change.minute.unwrap_or(self.minute()),
            change.second.unwrap_or(self.second()),
        );

        match (date, time) {
            (Some(date), Some(time)) => date.and_time(time),
            _ => {
                debug!(?change, "date change out of range, keeping original");
                *self
            }
        }
    }
}

/// Is `value` on today's local calendar date?
pub fn is_today(value: &DateTime<Local>) -> bool {
    value.date_naive() == Local::now().date_naive()
}
