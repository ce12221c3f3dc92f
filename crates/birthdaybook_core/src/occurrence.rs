//! Birthday occurrence arithmetic.
//!
//! # Responsibility
//! - Compute when a stored birthday (month/day) next occurs relative to a
//!   reference "now", and whether that occurrence is today.
//! - Stay pure: no clock access, no validation, no storage.
//!
//! # Invariants
//! - The stored birth year never influences recurrence.
//! - A day is exactly 86,400,000 milliseconds; day counts are not adjusted
//!   for DST shifts.
//! - Feb 29 birthdays are observed on Mar 1 in years without a leap day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Fixed-length day used for all day-count arithmetic.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns the calendar date on which `birthday` is observed in `year`.
///
/// The stored year of `birthday` is ignored. For every month/day except
/// Feb 29 this is simply the same month/day in `year`; Feb 29 maps to
/// Mar 1 when `year` has no leap day.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}

/// Returns whether `birthday` is observed on `now`'s calendar date.
///
/// Equivalent to comparing month and day for all birthdays except Feb 29,
/// which matches Mar 1 in common years.
pub fn is_today(birthday: NaiveDate, now: NaiveDateTime) -> bool {
    occurrence_in_year(birthday, now.date().year()) == now.date()
}

/// Returns the next observed occurrence of `birthday` on or after `now`.
///
/// The candidate is this year's occurrence at local midnight; when that
/// midnight lies strictly before `now` (time of day included), next year's
/// occurrence is used instead.
pub fn next_occurrence(birthday: NaiveDate, now: NaiveDateTime) -> NaiveDate {
    let candidate = occurrence_in_year(birthday, now.date().year());
    if candidate.and_time(NaiveTime::MIN) < now {
        occurrence_in_year(birthday, now.date().year() + 1)
    } else {
        candidate
    }
}

/// Returns the number of days from `now` until the next occurrence.
///
/// # Contract
/// - The result is the ceiling of the millisecond distance to the
///   occurrence's local midnight, divided by [`MILLIS_PER_DAY`].
/// - Returns 0 only when `now` is exactly that midnight; once the day has
///   started, the same-day occurrence counts toward next year, so callers
///   must detect "today" through [`is_today`] and use this value for
///   non-today birthdays only.
pub fn days_until(birthday: NaiveDate, now: NaiveDateTime) -> i64 {
    let candidate = next_occurrence(birthday, now).and_time(NaiveTime::MIN);
    // The candidate midnight is never before `now`, so the distance stays
    // non-negative and rounding up cannot cross zero.
    let millis = candidate.signed_duration_since(now).num_milliseconds();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::{days_until, is_today, next_occurrence, occurrence_in_year};
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn is_today_matches_month_and_day_for_any_stored_year() {
        let now = at(2026, 8, 23, 10, 30);
        assert!(is_today(date(1961, 8, 23), now));
        assert!(is_today(date(1999, 8, 23), now));
        assert!(is_today(date(2025, 8, 23), now));
    }

    #[test]
    fn is_today_rejects_other_days() {
        let now = at(2026, 8, 23, 10, 30);
        assert!(!is_today(date(1990, 8, 24), now));
        assert!(!is_today(date(1990, 7, 23), now));
    }

    #[test]
    fn days_until_counts_to_upcoming_midnight() {
        // Aug 26 midnight is 2 days 14 hours ahead; the ceiling is 3.
        let now = at(2026, 8, 23, 10, 0);
        assert_eq!(days_until(date(2001, 8, 26), now), 3);
    }

    #[test]
    fn days_until_is_one_just_before_the_day() {
        let now = at(2026, 8, 25, 23, 59);
        assert_eq!(days_until(date(2001, 8, 26), now), 1);
    }

    #[test]
    fn days_until_is_exact_for_whole_days_at_midnight() {
        // 72 hours on the dot must not round up to a fourth day.
        let midnight = at(2026, 8, 23, 0, 0);
        assert_eq!(days_until(date(2001, 8, 26), midnight), 3);
    }

    #[test]
    fn days_until_rolls_into_next_year_once_passed() {
        let now = at(2026, 8, 23, 10, 0);
        assert_eq!(days_until(date(1995, 3, 14), now), 203);
    }

    #[test]
    fn days_until_crosses_new_year() {
        let now = at(2026, 12, 30, 10, 0);
        assert_eq!(days_until(date(2000, 1, 2), now), 3);
    }

    #[test]
    fn days_until_is_zero_only_at_exact_midnight() {
        let midnight = at(2026, 8, 23, 0, 0);
        assert_eq!(days_until(date(1990, 8, 23), midnight), 0);

        let one_minute_in = at(2026, 8, 23, 0, 1);
        assert_eq!(days_until(date(1990, 8, 23), one_minute_in), 365);
    }

    #[test]
    fn same_day_birthday_counts_toward_next_year() {
        let now = at(2026, 8, 23, 10, 0);
        assert!(is_today(date(1990, 8, 23), now));
        assert_eq!(days_until(date(1990, 8, 23), now), 365);
    }

    #[test]
    fn leap_day_is_observed_on_march_first_in_common_years() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2026), date(2026, 3, 1));
        assert!(is_today(date(2000, 2, 29), at(2026, 3, 1, 9, 0)));
        assert_eq!(days_until(date(2000, 2, 29), at(2026, 2, 15, 0, 0)), 14);
    }

    #[test]
    fn leap_day_is_observed_on_feb_29_in_leap_years() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2028), date(2028, 2, 29));
        assert!(is_today(date(2000, 2, 29), at(2028, 2, 29, 12, 0)));
        assert!(!is_today(date(2000, 2, 29), at(2028, 3, 1, 12, 0)));
        assert_eq!(days_until(date(2000, 2, 29), at(2028, 2, 20, 0, 0)), 9);
    }

    #[test]
    fn leap_day_rolls_forward_to_the_next_leap_year() {
        // Mar 1 2027 has passed, so the next occurrence is Feb 29 2028.
        let now = at(2027, 12, 1, 0, 0);
        assert_eq!(next_occurrence(date(2000, 2, 29), now), date(2028, 2, 29));
        assert_eq!(days_until(date(2000, 2, 29), now), 90);
    }

    #[test]
    fn march_first_birthdays_are_unaffected_by_the_leap_rule() {
        assert!(is_today(date(1990, 3, 1), at(2026, 3, 1, 8, 0)));
        assert!(is_today(date(1990, 3, 1), at(2028, 3, 1, 8, 0)));
    }
}
