//! Postal work week numbering.
//!
//! A postal work week runs Saturday through Friday. Week 1 is the week that
//! starts on the work week epoch.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::CycleAnchors;

use super::dates::days_between;

/// The Saturday that starts the postal work week containing `date`.
///
/// # Example
///
/// ```
/// use mcore_engine::schedule::work_week_start;
/// use chrono::NaiveDate;
///
/// // Wednesday January 8, 2025 belongs to the week starting Saturday January 4.
/// let start = work_week_start(NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
/// assert_eq!(start, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
/// ```
pub fn work_week_start(date: NaiveDate) -> NaiveDate {
    // Sunday = 0 .. Saturday = 6, so Saturday is 0 days back and Friday 6.
    let days_since_saturday = (date.weekday().num_days_from_sunday() + 1) % 7;
    date.checked_sub_days(Days::new(u64::from(days_since_saturday)))
        .unwrap_or(date)
}

/// The work week number of `date` relative to the work week epoch.
///
/// The epoch week is 1 and the following week 2. Weeks before the epoch
/// continue downward (0, -1, ...) so that the rotation stays continuous in
/// both directions.
///
/// # Example
///
/// ```
/// use mcore_engine::models::CycleAnchors;
/// use mcore_engine::schedule::work_week_number;
/// use chrono::NaiveDate;
///
/// let anchors = CycleAnchors::default();
/// assert_eq!(work_week_number(anchors.work_week_epoch, &anchors), 1);
/// assert_eq!(work_week_number(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), &anchors), 2);
/// ```
pub fn work_week_number(date: NaiveDate, anchors: &CycleAnchors) -> i64 {
    let days = days_between(anchors.work_week_epoch, work_week_start(date));
    days.div_euclid(7) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_saturday_is_its_own_week_start() {
        assert_eq!(work_week_start(date(2025, 1, 4)), date(2025, 1, 4));
    }

    #[test]
    fn test_friday_belongs_to_previous_saturday() {
        assert_eq!(work_week_start(date(2025, 1, 10)), date(2025, 1, 4));
    }

    #[test]
    fn test_sunday_belongs_to_previous_saturday() {
        assert_eq!(work_week_start(date(2025, 1, 5)), date(2025, 1, 4));
    }

    #[test]
    fn test_week_start_is_always_saturday() {
        let mut day = date(2024, 12, 1);
        while day < date(2025, 2, 1) {
            let start = work_week_start(day);
            assert_eq!(start.weekday(), Weekday::Sat);
            assert!(days_between(start, day) < 7);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_epoch_week_is_one() {
        let anchors = CycleAnchors::default();
        for offset in 0..7 {
            let day = anchors.work_week_epoch + Days::new(offset);
            assert_eq!(work_week_number(day, &anchors), 1);
        }
    }

    #[test]
    fn test_following_week_is_two() {
        let anchors = CycleAnchors::default();
        let next = anchors.work_week_epoch + Days::new(7);
        assert_eq!(work_week_number(next, &anchors), 2);
    }

    #[test]
    fn test_weeks_before_epoch_count_down() {
        let anchors = CycleAnchors::default();
        // Friday January 3, 2025 is the last day of the week before the epoch.
        assert_eq!(work_week_number(date(2025, 1, 3), &anchors), 0);
        assert_eq!(work_week_number(date(2024, 12, 27), &anchors), -1);
        assert_eq!(work_week_number(date(2024, 12, 21), &anchors), -1);
        assert_eq!(work_week_number(date(2024, 12, 20), &anchors), -2);
    }

    #[test]
    fn test_far_future_week() {
        let anchors = CycleAnchors::default();
        // 2026-01-03 is a Saturday 52 weeks after the epoch.
        assert_eq!(work_week_number(date(2026, 1, 3), &anchors), 53);
    }
}
