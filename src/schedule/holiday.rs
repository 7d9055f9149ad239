//! Holiday resolution and weekend observance.
//!
//! A rule resolves to its actual date for a year; the observed date then
//! moves Saturday holidays to the preceding Friday and Sunday holidays to the
//! following Monday.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{HolidayCalendar, HolidayDefinition, HolidayInfo, HolidayRule, Ordinal};

use super::dates::days_in_month;

/// A holiday resolved for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedHoliday {
    /// Display name.
    pub name: String,
    /// Optional explanatory text.
    pub info: Option<String>,
    /// The date the rule produces.
    pub actual_date: NaiveDate,
    /// The date the holiday is recognised on.
    pub observed_date: NaiveDate,
}

impl From<ObservedHoliday> for HolidayInfo {
    fn from(holiday: ObservedHoliday) -> Self {
        HolidayInfo {
            name: holiday.name,
            info: holiday.info,
            actual_date: holiday.actual_date,
            observed_date: holiday.observed_date,
        }
    }
}

/// Resolves a rule to its actual (unobserved) date in `year`.
///
/// Returns `None` when the rule has no date that year: a fixed February 29
/// outside leap years, or an nth weekday the month does not contain.
///
/// # Example
///
/// ```
/// use mcore_engine::models::HolidayRule;
/// use mcore_engine::schedule::resolve_holiday;
/// use chrono::NaiveDate;
///
/// let memorial_day = HolidayRule::parse(5, "last-monday").unwrap();
/// assert_eq!(
///     resolve_holiday(&memorial_day, 2025),
///     NaiveDate::from_ymd_opt(2025, 5, 26)
/// );
/// ```
pub fn resolve_holiday(rule: &HolidayRule, year: i32) -> Option<NaiveDate> {
    match *rule {
        HolidayRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
        HolidayRule::Floating {
            month,
            ordinal: Ordinal::Nth(n),
            weekday,
        } => nth_weekday_of_month(year, month, weekday, n),
        HolidayRule::Floating {
            month,
            ordinal: Ordinal::Last,
            weekday,
        } => last_weekday_of_month(year, month, weekday),
    }
}

/// Counts occurrences of `weekday` forward from the 1st of the month.
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }

    let mut seen = 0;
    NaiveDate::from_ymd_opt(year, month, 1)?
        .iter_days()
        .take_while(|date| date.month() == month)
        .find(|date| {
            if date.weekday() == weekday {
                seen += 1;
            }
            seen == n
        })
}

/// Scans backward from the last day of the month to the first match.
fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = days_in_month(year, month)?;
    let last = NaiveDate::from_ymd_opt(year, month, last_day)?;
    std::iter::successors(Some(last), |date| date.pred_opt())
        .take(7)
        .find(|date| date.weekday() == weekday)
}

/// Moves a Saturday to the preceding Friday and a Sunday to the following
/// Monday. Other days are returned unchanged.
///
/// # Example
///
/// ```
/// use mcore_engine::schedule::apply_weekend_observance;
/// use chrono::NaiveDate;
///
/// // July 4, 2026 is a Saturday.
/// let observed = apply_weekend_observance(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap());
/// assert_eq!(observed, NaiveDate::from_ymd_opt(2026, 7, 3).unwrap());
/// ```
pub fn apply_weekend_observance(date: NaiveDate) -> NaiveDate {
    let shifted = match date.weekday() {
        Weekday::Sat => date.checked_sub_days(Days::new(1)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    };
    shifted.unwrap_or(date)
}

fn observe(definition: &HolidayDefinition, year: i32) -> Option<ObservedHoliday> {
    let Some(actual_date) = resolve_holiday(&definition.rule, year) else {
        debug!(
            holiday = %definition.name,
            rule = %definition.rule,
            year,
            "Holiday rule has no date this year"
        );
        return None;
    };

    Some(ObservedHoliday {
        name: definition.name.clone(),
        info: definition.info.clone(),
        actual_date,
        observed_date: apply_weekend_observance(actual_date),
    })
}

/// Resolves and observes every configured holiday for `year`, in
/// configuration order. Rules without a date that year are skipped.
pub fn observed_holidays(calendar: &HolidayCalendar, year: i32) -> Vec<ObservedHoliday> {
    calendar
        .holidays()
        .iter()
        .filter_map(|definition| observe(definition, year))
        .collect()
}

/// Returns the holiday observed on `date`, if any.
///
/// Rules are tried in configuration order and the first match wins. Each
/// rule is resolved for the date's year and for the neighbouring years, so a
/// January 1 that falls on a Saturday is reported on December 31 of the year
/// before.
///
/// # Example
///
/// ```
/// use mcore_engine::models::HolidayCalendar;
/// use mcore_engine::schedule::is_holiday;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::federal();
/// let thanksgiving = is_holiday(&calendar, NaiveDate::from_ymd_opt(2025, 11, 27).unwrap());
/// assert_eq!(thanksgiving.map(|h| h.name), Some("Thanksgiving Day".to_string()));
///
/// assert!(is_holiday(&calendar, NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()).is_none());
/// ```
pub fn is_holiday(calendar: &HolidayCalendar, date: NaiveDate) -> Option<HolidayInfo> {
    let year = date.year();
    calendar.holidays().iter().find_map(|definition| {
        candidate_years(year)
            .filter_map(|candidate_year| observe(definition, candidate_year))
            .find(|holiday| holiday.observed_date == date)
            .map(HolidayInfo::from)
    })
}

/// Holidays observed within the calendar year `year`, ordered by observed
/// date. Includes observances that spill in from the neighbouring years.
pub fn holidays_observed_in_year(calendar: &HolidayCalendar, year: i32) -> Vec<ObservedHoliday> {
    let mut holidays: Vec<ObservedHoliday> = candidate_years(year)
        .flat_map(|candidate_year| observed_holidays(calendar, candidate_year))
        .filter(|holiday| holiday.observed_date.year() == year)
        .collect();
    holidays.sort_by_key(|holiday| holiday.observed_date);
    holidays
}

/// The year itself, then the year before and the year after, skipping any
/// that overflow.
pub(crate) fn candidate_years(year: i32) -> impl Iterator<Item = i32> {
    [Some(year), year.checked_sub(1), year.checked_add(1)]
        .into_iter()
        .flatten()
}
