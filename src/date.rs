//! Birth date validation.
//!
//! The view layer hands over three raw values exactly as the user entered
//! them; anything unset arrives as `None` (or zero, for selection widgets
//! whose placeholder carries value 0). Validation either rejects the input
//! with a [`ValidationError`] or produces the canonical `NaiveDate` the rest
//! of the crate computes with.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// How far back a birth date may lie, in years.
const MAX_AGE_YEARS: i32 = 150;

/// Validate raw day/month/year input against a reference date.
///
/// Checks run in order: all fields present, the triple names a real
/// Gregorian date, the date is not after `today`, and the date is not more
/// than [`MAX_AGE_YEARS`] before `today`.
pub fn validate(
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let (day, month, year) = match (day, month, year) {
        (Some(d), Some(m), Some(y)) if d != 0 && m != 0 && y != 0 => (d, m, y),
        _ => return Err(ValidationError::MissingField),
    };

    // from_ymd_opt only accepts canonical dates; a clamped or overflowed
    // triple (Feb 30, Apr 31, day 29 of a non-leap February) comes back None.
    let birth =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidDate)?;

    if birth > today {
        return Err(ValidationError::FutureDate);
    }

    if birth < years_before(today, MAX_AGE_YEARS) {
        return Err(ValidationError::TooFarInPast);
    }

    Ok(birth)
}

/// `today` shifted back `n` years with month and day held fixed.
///
/// A Feb 29 reference lands on Mar 1 when the shifted year is not a leap
/// year, matching how the next-birthday projection treats Feb 29.
fn years_before(today: NaiveDate, n: i32) -> NaiveDate {
    let year = today.year() - n;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2024, 5, 20);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn accepts_a_canonical_date() {
        let birth = validate(Some(15), Some(5), Some(2000), today()).unwrap();
        assert_eq!((birth.year(), birth.month(), birth.day()), (2000, 5, 15));
    }

    #[test]
    fn rejects_unset_fields() {
        let t = today();
        assert_eq!(
            validate(None, Some(5), Some(2000), t),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate(Some(15), None, Some(2000), t),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate(Some(15), Some(5), None, t),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn rejects_zero_as_unset() {
        let t = today();
        assert_eq!(
            validate(Some(0), Some(5), Some(2000), t),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate(Some(15), Some(0), Some(2000), t),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            validate(Some(15), Some(5), Some(0), t),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn rejects_day_31_in_a_30_day_month() {
        assert_eq!(
            validate(Some(31), Some(4), Some(2024), today()),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn rejects_feb_29_outside_leap_years() {
        assert_eq!(
            validate(Some(29), Some(2), Some(2023), today()),
            Err(ValidationError::InvalidDate)
        );
        // 2024 is a leap year, so the same day/month passes.
        assert!(validate(Some(29), Some(2), Some(2024), today()).is_ok());
    }

    #[test]
    fn rejects_tomorrow() {
        assert_eq!(
            validate(Some(21), Some(5), Some(2024), today()),
            Err(ValidationError::FutureDate)
        );
    }

    #[test]
    fn age_cutoff_is_150_years() {
        let t = today();
        assert_eq!(
            validate(Some(20), Some(5), Some(1873), t),
            Err(ValidationError::TooFarInPast)
        );
        assert!(validate(Some(20), Some(5), Some(1875), t).is_ok());
        // Exactly 150 years is still accepted; the comparison is strict.
        assert!(validate(Some(20), Some(5), Some(1874), t).is_ok());
    }

    #[test]
    fn leap_day_reference_anchors_cutoff_at_mar_1() {
        // 1874 is not a leap year, so the cutoff for a Feb 29 reference
        // becomes 1874-03-01.
        let t = date(2024, 2, 29);
        assert_eq!(
            validate(Some(28), Some(2), Some(1874), t),
            Err(ValidationError::TooFarInPast)
        );
        assert!(validate(Some(1), Some(3), Some(1874), t).is_ok());
    }
}
