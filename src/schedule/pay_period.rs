//! Pay period resolution.
//!
//! Pay periods are consecutive 14-day windows counted from the pay period
//! epoch. Numbering runs 1..=26 within a pay year and rolls over into the
//! next (or previous) year.

use chrono::NaiveDate;

use crate::models::{CycleAnchors, PAY_PERIOD_DAYS, PAY_PERIODS_PER_YEAR, PayPeriod};

use super::dates::{add_days, days_between};

const PERIOD_LENGTH: i64 = PAY_PERIOD_DAYS as i64;

/// Returns the pay period containing `date`.
///
/// Dates before the epoch resolve to earlier periods, numbered backwards
/// through previous pay years.
///
/// # Example
///
/// ```
/// use mcore_engine::models::CycleAnchors;
/// use mcore_engine::schedule::pay_period_info;
/// use chrono::NaiveDate;
///
/// let anchors = CycleAnchors::default();
/// let period = pay_period_info(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &anchors);
///
/// assert_eq!(period.year, 2025);
/// assert_eq!(period.number, 2);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 12, 28).unwrap());
/// assert_eq!(period.pay_date, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
/// ```
pub fn pay_period_info(date: NaiveDate, anchors: &CycleAnchors) -> PayPeriod {
    period_at_offset(offset_of_date(date, anchors), anchors)
}

/// Returns period `number` of pay year `year`, `None` if `number` is not in
/// 1..=26.
pub fn pay_period_by_number(year: i32, number: u8, anchors: &CycleAnchors) -> Option<PayPeriod> {
    if number == 0 || i64::from(number) > PAY_PERIODS_PER_YEAR {
        return None;
    }

    Some(period_at_offset(offset_of_number(year, number, anchors), anchors))
}

/// Every pay period relevant to calendar year `year`, in order.
///
/// The table starts at whichever comes first of period 1 of pay year `year`
/// and the period containing January 1, and ends at whichever comes last of
/// period 26 and the period containing December 31. Periods are contiguous
/// except where start dates saturate at the ends of the date range.
///
/// # Example
///
/// ```
/// use mcore_engine::models::CycleAnchors;
/// use mcore_engine::schedule::pay_periods_for_year;
///
/// let periods = pay_periods_for_year(2025, &CycleAnchors::default());
/// assert_eq!(periods.first().map(|p| p.label()), Some("2025-01".to_string()));
/// assert_eq!(periods.last().map(|p| p.label()), Some("2026-02".to_string()));
/// ```
pub fn pay_periods_for_year(year: i32, anchors: &CycleAnchors) -> Vec<PayPeriod> {
    let (Some(jan_first), Some(dec_last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Vec::new();
    };

    let first = offset_of_number(year, 1, anchors).min(offset_of_date(jan_first, anchors));
    let last = offset_of_number(year, PAY_PERIODS_PER_YEAR as u8, anchors)
        .max(offset_of_date(dec_last, anchors));

    // Every row numbers exactly as `pay_period_info` would.
    (first..=last)
        .map(|offset| period_at_offset(offset, anchors))
        .collect()
}

/// Whole periods from the epoch period to the one containing `date`.
fn offset_of_date(date: NaiveDate, anchors: &CycleAnchors) -> i64 {
    days_between(anchors.pay_period_epoch, date).div_euclid(PERIOD_LENGTH)
}

/// Whole periods from the epoch period to period `number` of pay year `year`.
fn offset_of_number(year: i32, number: u8, anchors: &CycleAnchors) -> i64 {
    (i64::from(year) - i64::from(anchors.pay_period_epoch_year)) * PAY_PERIODS_PER_YEAR
        + (i64::from(number) - i64::from(anchors.pay_period_epoch_number))
}

/// The period `offset` periods after the epoch period (negative for before).
///
/// Start dates saturate at the ends of the supported date range.
fn period_at_offset(offset: i64, anchors: &CycleAnchors) -> PayPeriod {
    let zero_based = i64::from(anchors.pay_period_epoch_number) - 1 + offset;
    let year = i64::from(anchors.pay_period_epoch_year) + zero_based.div_euclid(PAY_PERIODS_PER_YEAR);
    // rem_euclid keeps the number in 1..=26.
    let number = (zero_based.rem_euclid(PAY_PERIODS_PER_YEAR) + 1) as u8;
    let start_date = add_days(anchors.pay_period_epoch, offset * PERIOD_LENGTH);

    PayPeriod::starting(year as i32, number, start_date)
}
