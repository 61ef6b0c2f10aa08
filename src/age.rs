//! Calendar age arithmetic.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! manually:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month preceding `today`)
//!   • leap years
//!   • varying month lengths

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Stand-in for "zero days until the next birthday": when the birthday falls
/// on `today`, the full-cycle value is reported instead of 0. The value is
/// 365 even when the year ahead contains a Feb 29.
const FULL_CYCLE_DAYS: i64 = 365;

/// Age broken down for display: elapsed years/months/days, total days lived,
/// and days remaining until the next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeResult {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days_lived: i64,
    pub days_until_next_birthday: i64,
}

/// Compute the age of `birth` as of `today`.
///
/// `birth` must not be after `today`; [`crate::validate`] guarantees this for
/// user input.
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> AgeResult {
    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Fix day underflow by borrowing the length of the month before `today`.
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days_lived = (today - birth).num_days();

    let days_until_next_birthday = match (next_birthday(birth, today) - today).num_days() {
        0 => FULL_CYCLE_DAYS, // birthday is today
        n => n,
    };

    AgeResult {
        years,
        months,
        days,
        total_days_lived,
        days_until_next_birthday,
    }
}

/// First occurrence of the birthday on or after `today`.
fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = anniversary(today.year(), birth);
    if candidate < today {
        anniversary(today.year() + 1, birth)
    } else {
        candidate
    }
}

/// The birthday as it falls in `year`. A Feb 29 birth date falls on Mar 1 in
/// common years; no other day/month can fail to exist since `birth` is a real
/// date.
fn anniversary(year: i32, birth: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // unreachable for months taken from a real date
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
