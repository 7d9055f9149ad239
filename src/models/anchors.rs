//! Cycle anchors.
//!
//! The fixed reference dates that seed every schedule computation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of pay periods in a pay year.
pub const PAY_PERIODS_PER_YEAR: i64 = 26;

/// The reference dates and numbers every resolver computes against.
///
/// Dates are plain calendar days. Because [`NaiveDate`] carries no timezone,
/// day differences between anchors and query dates are never skewed by
/// daylight-saving transitions.
///
/// # Example
///
/// ```
/// use mcore_engine::models::CycleAnchors;
/// use chrono::NaiveDate;
///
/// let anchors = CycleAnchors::default();
/// assert_eq!(anchors.pay_period_epoch, NaiveDate::from_ymd_opt(2024, 12, 14).unwrap());
/// assert!(anchors.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleAnchors {
    /// First day of pay period `pay_period_epoch_number` of `pay_period_epoch_year`.
    pub pay_period_epoch: NaiveDate,
    /// The period number the epoch starts (1..=26).
    pub pay_period_epoch_number: u8,
    /// The pay year the epoch period belongs to.
    pub pay_period_epoch_year: i32,
    /// A Saturday that starts work week 1 of the carrier rotation.
    pub work_week_epoch: NaiveDate,
    /// Day 0 of the route rotation cycle.
    pub rotation_epoch: NaiveDate,
}

impl Default for CycleAnchors {
    fn default() -> Self {
        Self {
            pay_period_epoch: ymd(2024, 12, 14),
            pay_period_epoch_number: 1,
            pay_period_epoch_year: 2025,
            work_week_epoch: ymd(2025, 1, 4),
            rotation_epoch: ymd(2025, 1, 4),
        }
    }
}

impl CycleAnchors {
    /// Checks that the anchors are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAnchors`] if the work week epoch is not a
    /// Saturday or the epoch period number is outside 1..=26.
    pub fn validate(&self) -> EngineResult<()> {
        if self.work_week_epoch.weekday() != Weekday::Sat {
            return Err(EngineError::InvalidAnchors {
                message: format!(
                    "work week epoch {} is a {}, expected a Saturday",
                    self.work_week_epoch,
                    self.work_week_epoch.weekday()
                ),
            });
        }

        if !(1..=PAY_PERIODS_PER_YEAR).contains(&i64::from(self.pay_period_epoch_number)) {
            return Err(EngineError::InvalidAnchors {
                message: format!(
                    "pay period epoch number {} is outside 1..={}",
                    self.pay_period_epoch_number, PAY_PERIODS_PER_YEAR
                ),
            });
        }

        Ok(())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Valid anchor date")
}
