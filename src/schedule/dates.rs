//! Calendar-day helpers shared by the resolvers.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the calendar day an instant falls on, as read on the wall clock
/// of its own timezone.
///
/// Every resolver works on the returned [`NaiveDate`], so two instants that
/// show the same date in their respective zones always produce the same
/// answers regardless of offsets or daylight-saving rules.
///
/// # Example
///
/// ```
/// use mcore_engine::schedule::calendar_day;
/// use chrono::{FixedOffset, NaiveDate, TimeZone};
///
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// let instant = tokyo.with_ymd_and_hms(2025, 7, 4, 0, 30, 0).unwrap();
/// assert_eq!(calendar_day(&instant), NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
/// ```
pub fn calendar_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.naive_local().date()
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Adds a signed number of days, saturating at the ends of the supported
/// date range.
pub(crate) fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// The number of days in a month, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    if month == 12 {
        // December of the last supported year has no following January.
        return Some(31);
    }
    let next = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    u32::try_from(days_between(first, next)).ok()
}

/// English month name for 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// True if the date is a Sunday.
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}
