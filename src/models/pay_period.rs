//! Pay period model.
//!
//! This module contains the [`PayPeriod`] value produced by the pay period
//! resolver.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::anchors::PAY_PERIODS_PER_YEAR;

/// Length of a pay period in days.
pub const PAY_PERIOD_DAYS: u64 = 14;

/// Days from a period's last day to its pay date.
///
/// Earlier revisions of the schedule tables paid six days after period
/// close; seven is the current rule.
pub const PAY_DATE_OFFSET_DAYS: u64 = 7;

/// A 14-day pay period with its number within the pay year and its pay date.
///
/// # Example
///
/// ```
/// use mcore_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::starting(2025, 1, NaiveDate::from_ymd_opt(2024, 12, 14).unwrap());
///
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 12, 27).unwrap());
/// assert_eq!(period.pay_date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
/// assert_eq!(period.label(), "2025-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The pay year the period is numbered in.
    pub year: i32,
    /// The period number within the pay year (1..=26).
    pub number: u8,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// The day pay for the period is issued.
    pub pay_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the period numbered `number` of pay year `year` that begins on
    /// `start_date`, deriving its end and pay dates.
    pub fn starting(year: i32, number: u8, start_date: NaiveDate) -> Self {
        // Saturates at the end of the supported date range.
        let later = |date: NaiveDate, days| {
            date.checked_add_days(Days::new(days))
                .unwrap_or(NaiveDate::MAX)
        };
        let end_date = later(start_date, PAY_PERIOD_DAYS - 1);
        Self {
            year,
            number,
            start_date,
            end_date,
            pay_date: later(end_date, PAY_DATE_OFFSET_DAYS),
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use mcore_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::starting(2025, 2, NaiveDate::from_ymd_opt(2024, 12, 28).unwrap());
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 12, 28).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The "YYYY-PP" label used in pay period tables.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.number)
    }

    /// The period immediately after this one, `None` past the end of the
    /// supported date range.
    pub fn next(&self) -> Option<Self> {
        let (year, number) = if i64::from(self.number) >= PAY_PERIODS_PER_YEAR {
            (self.year.checked_add(1)?, 1)
        } else {
            (self.year, self.number + 1)
        };
        let start_date = self.end_date.checked_add_days(Days::new(1))?;
        Some(Self::starting(year, number, start_date))
    }

    /// The period immediately before this one, `None` before the start of
    /// the supported date range.
    pub fn previous(&self) -> Option<Self> {
        let (year, number) = if self.number <= 1 {
            (self.year.checked_sub(1)?, PAY_PERIODS_PER_YEAR as u8)
        } else {
            (self.year, self.number - 1)
        };
        let start_date = self.start_date.checked_sub_days(Days::new(PAY_PERIOD_DAYS))?;
        Some(Self::starting(year, number, start_date))
    }
}
