//! Weekday trading calendar.
//!
//! Saturdays and Sundays are the only non-trading days; market holidays are
//! not modeled.

use chrono::{Datelike, NaiveDate, Weekday};

/// Check whether a date is a trading day (Monday through Friday).
#[inline]
pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Trading days in `start..=end`, oldest first.
pub fn trading_days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take_while(move |date| *date <= end)
        .filter(|date| is_trading_day(*date))
}

/// Trading days strictly after `date`, in ascending order.
pub fn trading_days_after(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    date.iter_days().skip(1).filter(|d| is_trading_day(*d))
}

/// Count trading days in `start..=end`.
pub fn count_trading_days(start: NaiveDate, end: NaiveDate) -> usize {
    trading_days_between(start, end).count()
}
