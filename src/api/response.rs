//! Response types for the schedule query surface.
//!
//! This module defines the answers returned for each request kind and the
//! error structure returned when a request cannot be answered.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Acronym, HolidayInfo, PayPeriod, SortOrder};
use crate::schedule::MonthView;

/// The answer to a [`ScheduleRequest`](super::ScheduleRequest), tagged by
/// `kind` like the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleResponse {
    /// Answer to a `day` request.
    Day(DayReport),
    /// Answer to a `pay_period` request.
    PayPeriod(PayPeriod),
    /// Answer to a `pay_period_table` request.
    PayPeriodTable(PayPeriodTable),
    /// Answer to a `holidays` request.
    Holidays(HolidayList),
    /// Answer to a `month` request.
    Month(MonthView),
    /// Answer to a `year` request.
    Year(YearView),
    /// Answer to an `acronyms` request.
    Acronyms(AcronymList),
}

/// Everything known about one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    /// The date described.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Postal work week number.
    pub work_week: i64,
    /// The pay period containing the date.
    pub pay_period: PayPeriod,
    /// The observed holiday, if any.
    pub holiday: Option<HolidayInfo>,
    /// Every carrier off on this date.
    pub carriers_off: Vec<String>,
    /// The carrier checked, if one was requested or selected.
    pub carrier: Option<String>,
    /// Whether the checked carrier (or, with none, nobody) is off.
    pub is_day_off: bool,
    /// The T6 route label, if one applies.
    pub route_label: Option<String>,
    /// The letter schedule label, if one applies.
    pub letter_label: Option<String>,
    /// The carrier whose letter slot the date is, `None` on Sundays.
    pub letter_carrier: Option<String>,
}

/// One row of a pay period table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPeriodRow {
    /// The "YYYY-PP" label.
    pub label: String,
    /// The period itself.
    #[serde(flatten)]
    pub period: PayPeriod,
    /// Whether the period contains the requested current date.
    pub is_current: bool,
}

/// Pay periods relevant to a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPeriodTable {
    /// Calendar year.
    pub year: i32,
    /// Rows in date order.
    pub periods: Vec<PayPeriodRow>,
}

/// Holidays observed within a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayList {
    /// Calendar year.
    pub year: i32,
    /// Holidays ordered by observed date.
    pub holidays: Vec<HolidayInfo>,
}

/// Twelve months of a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearView {
    /// Calendar year.
    pub year: i32,
    /// January through December.
    pub months: Vec<MonthView>,
}

/// Acronym search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcronymList {
    /// The search text as given.
    pub term: String,
    /// Sort direction applied.
    pub order: SortOrder,
    /// Matching entries.
    pub results: Vec<Acronym>,
}

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                format!("Configuration file not found: {}", path),
            ),
            EngineError::ConfigParseError { path, message } => ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration parse error",
                format!("Failed to parse {}: {}", path, message),
            ),
            EngineError::InvalidAnchors { message }
            | EngineError::InvalidCarrierTable { message }
            | EngineError::InvalidRotationCycle { message } => {
                ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message)
            }
            err @ EngineError::InvalidHolidayRule { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Invalid configuration", err.to_string())
            }
            err @ EngineError::InvalidRouteSet { .. } => {
                ApiError::validation_error(err.to_string())
            }
            EngineError::InvalidQuery { message } => ApiError::with_details(
                "INVALID_QUERY",
                message,
                "The request parameters cannot be answered",
            ),
        }
    }
}

/// Wraps a failed request so that error bodies are distinguishable from
/// answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error.
    pub error: ApiError,
}
