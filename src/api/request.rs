//! Request types for the schedule query surface.
//!
//! Every request is a JSON object tagged by `kind`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SortOrder;

/// A query against the schedule engine.
///
/// # Example
///
/// ```
/// use mcore_engine::api::ScheduleRequest;
///
/// let request: ScheduleRequest =
///     serde_json::from_str(r#"{"kind": "month", "year": 2025, "month": 7}"#).unwrap();
/// assert_eq!(request, ScheduleRequest::Month { year: 2025, month: 7, today: None });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleRequest {
    /// Everything known about one date.
    Day {
        /// The date to describe.
        date: NaiveDate,
        /// Carrier colour to check instead of the selected one.
        #[serde(default)]
        carrier: Option<String>,
    },
    /// The pay period containing a date.
    PayPeriod {
        /// Any date within the period.
        date: NaiveDate,
    },
    /// The pay period table for a calendar year.
    PayPeriodTable {
        /// Calendar year.
        year: i32,
        /// Marks the period containing this date as current.
        #[serde(default)]
        today: Option<NaiveDate>,
    },
    /// Observed holidays in a calendar year.
    Holidays {
        /// Calendar year.
        year: i32,
    },
    /// One calendar month.
    Month {
        /// Calendar year.
        year: i32,
        /// Month number, 1..=12.
        month: u32,
        /// Date to mark as today.
        #[serde(default)]
        today: Option<NaiveDate>,
    },
    /// All twelve months of a year.
    Year {
        /// Calendar year.
        year: i32,
        /// Date to mark as today.
        #[serde(default)]
        today: Option<NaiveDate>,
    },
    /// Acronym search.
    Acronyms {
        /// Search text; blank lists everything.
        #[serde(default)]
        term: String,
        /// Sort direction by acronym.
        #[serde(default)]
        order: SortOrder,
    },
}

impl ScheduleRequest {
    /// The request kind as it appears on the wire, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleRequest::Day { .. } => "day",
            ScheduleRequest::PayPeriod { .. } => "pay_period",
            ScheduleRequest::PayPeriodTable { .. } => "pay_period_table",
            ScheduleRequest::Holidays { .. } => "holidays",
            ScheduleRequest::Month { .. } => "month",
            ScheduleRequest::Year { .. } => "year",
            ScheduleRequest::Acronyms { .. } => "acronyms",
        }
    }
}
