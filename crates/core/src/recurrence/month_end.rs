//! Day-of-month resolution for monthly and yearly cadences.
//!
//! Advancing "one month" from the 31st has no single right answer, so the
//! day is always derived from the anchor rather than from the previous
//! occurrence:
//!
//! - an anchor on the last day of its month stays on the last day
//!   (Jan 31 → Feb 28 → Mar 31)
//! - any other anchor keeps its day, clamped to the target month's length
//!   (Jan 30 → Feb 28 → Mar 30)
//!
//! Nothing here ever rolls over into the following month.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in the given month, or `None` if the month
/// is out of range.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

/// Returns true if `date` is the last calendar day of its month.
pub fn is_end_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_some_and(|next| next.day() == 1)
}

/// Resolves the day of month for an occurrence in `year`/`month`.
pub fn adjust_day(
    year: i32,
    month: u32,
    anchor_day: u32,
    anchor_was_month_end: bool,
) -> Option<u32> {
    let last_day = last_day_of_month(year, month)?;
    if anchor_was_month_end {
        Some(last_day)
    } else {
        Some(anchor_day.min(last_day))
    }
}

/// Builds the occurrence date for `year`/`month` using [`adjust_day`].
pub fn adjusted_date(
    year: i32,
    month: u32,
    anchor_day: u32,
    anchor_was_month_end: bool,
) -> Option<NaiveDate> {
    let day = adjust_day(year, month, anchor_day, anchor_was_month_end)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2025, 1), Some(31));
        assert_eq!(last_day_of_month(2025, 2), Some(28));
        assert_eq!(last_day_of_month(2024, 2), Some(29));
        assert_eq!(last_day_of_month(2025, 4), Some(30));
        assert_eq!(last_day_of_month(2025, 12), Some(31));
        assert_eq!(last_day_of_month(1900, 2), Some(28));
        assert_eq!(last_day_of_month(2000, 2), Some(29));
        assert_eq!(last_day_of_month(2025, 13), None);
    }

    #[test]
    fn test_is_end_of_month() {
        assert!(is_end_of_month(make_date(2025, 1, 31)));
        assert!(is_end_of_month(make_date(2025, 2, 28)));
        assert!(is_end_of_month(make_date(2024, 2, 29)));
        assert!(is_end_of_month(make_date(2025, 12, 31)));
        assert!(!is_end_of_month(make_date(2024, 2, 28)));
        assert!(!is_end_of_month(make_date(2025, 1, 30)));
    }

    #[test]
    fn test_adjust_day_month_end_anchor() {
        assert_eq!(adjust_day(2025, 2, 31, true), Some(28));
        assert_eq!(adjust_day(2025, 3, 31, true), Some(31));
        assert_eq!(adjust_day(2025, 4, 31, true), Some(30));
        // Feb 28 anchor in a non-leap year was a month end, so it follows
        // the end of the month into March.
        assert_eq!(adjust_day(2025, 3, 28, true), Some(31));
    }

    #[test]
    fn test_adjust_day_clamps() {
        assert_eq!(adjust_day(2025, 2, 30, false), Some(28));
        assert_eq!(adjust_day(2024, 2, 30, false), Some(29));
        assert_eq!(adjust_day(2025, 3, 30, false), Some(30));
        assert_eq!(adjust_day(2025, 6, 15, false), Some(15));
    }

    #[test]
    fn test_adjusted_date_leap_day() {
        // Leap-day anchor is a month end: degrades to Feb 28 and recovers.
        assert_eq!(adjusted_date(2025, 2, 29, true), Some(make_date(2025, 2, 28)));
        assert_eq!(adjusted_date(2028, 2, 29, true), Some(make_date(2028, 2, 29)));
        // Literal Feb 28 in a leap year is not a month end and stays put.
        assert_eq!(adjusted_date(2028, 2, 28, false), Some(make_date(2028, 2, 28)));
    }
}
