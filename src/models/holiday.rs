//! Holiday rules and the holiday calendar.
//!
//! Rules are decoded once, when configuration is loaded, from the compact
//! text grammar used in the holiday data files (`day: 4` or
//! `day: fourth-thursday`) into the [`HolidayRule`] variant.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which occurrence of a weekday within a month a floating rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    /// The nth occurrence, 1..=5.
    Nth(u8),
    /// The last occurrence.
    Last,
}

impl Ordinal {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "first" | "1st" => Some(Ordinal::Nth(1)),
            "second" | "2nd" => Some(Ordinal::Nth(2)),
            "third" | "3rd" => Some(Ordinal::Nth(3)),
            "fourth" | "4th" => Some(Ordinal::Nth(4)),
            "fifth" | "5th" => Some(Ordinal::Nth(5)),
            "last" => Some(Ordinal::Last),
            _ => None,
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinal::Nth(1) => write!(f, "first"),
            Ordinal::Nth(2) => write!(f, "second"),
            Ordinal::Nth(3) => write!(f, "third"),
            Ordinal::Nth(4) => write!(f, "fourth"),
            Ordinal::Nth(5) => write!(f, "fifth"),
            Ordinal::Nth(n) => write!(f, "{}th", n),
            Ordinal::Last => write!(f, "last"),
        }
    }
}

/// How a holiday's date is derived for a given year.
///
/// # Example
///
/// ```
/// use mcore_engine::models::{HolidayRule, Ordinal};
/// use chrono::Weekday;
///
/// let thanksgiving = HolidayRule::parse(11, "fourth-thursday").unwrap();
/// assert_eq!(
///     thanksgiving,
///     HolidayRule::Floating { month: 11, ordinal: Ordinal::Nth(4), weekday: Weekday::Thu }
/// );
/// assert_eq!(thanksgiving.to_string(), "fourth-thursday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month, 1..=12.
        month: u32,
        /// Day of month, 1..=31.
        day: u32,
    },
    /// A given occurrence of a weekday in a month.
    Floating {
        /// Month, 1..=12.
        month: u32,
        /// Which occurrence.
        ordinal: Ordinal,
        /// The weekday counted.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// Decodes a floating rule such as `"third-monday"` or `"last-monday"`.
    ///
    /// The text is matched case-insensitively; the weekday may be spelled out
    /// or abbreviated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHolidayRule`] if the month is outside
    /// 1..=12 or the text is not `<ordinal>-<weekday>`.
    pub fn parse(month: u32, text: &str) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidHolidayRule {
            name: String::new(),
            rule: text.to_string(),
            message,
        };

        check_month(month).map_err(invalid)?;

        let lowered = text.trim().to_ascii_lowercase();
        let (ordinal_text, weekday_text) = lowered
            .split_once('-')
            .ok_or_else(|| invalid("expected '<ordinal>-<weekday>'".to_string()))?;

        let ordinal = Ordinal::parse(ordinal_text)
            .ok_or_else(|| invalid(format!("unknown ordinal '{}'", ordinal_text)))?;
        let weekday = weekday_text
            .parse::<Weekday>()
            .map_err(|_| invalid(format!("unknown weekday '{}'", weekday_text)))?;

        Ok(HolidayRule::Floating {
            month,
            ordinal,
            weekday,
        })
    }

    /// Creates a fixed-date rule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHolidayRule`] if the month is outside
    /// 1..=12 or the day is outside 1..=31. Days that only exist in some
    /// years (February 29) are accepted and simply do not resolve in other
    /// years.
    pub fn fixed(month: u32, day: u32) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidHolidayRule {
            name: String::new(),
            rule: format!("{:02}-{:02}", month, day),
            message,
        };

        check_month(month).map_err(invalid)?;
        if !(1..=31).contains(&day) {
            return Err(invalid(format!("day {} is outside 1..=31", day)));
        }

        Ok(HolidayRule::Fixed { month, day })
    }

    /// Returns the month the holiday falls in.
    pub fn month(&self) -> u32 {
        match self {
            HolidayRule::Fixed { month, .. } | HolidayRule::Floating { month, .. } => *month,
        }
    }
}

fn check_month(month: u32) -> Result<(), String> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(format!("month {} is outside 1..=12", month))
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayRule::Fixed { month, day } => write!(f, "{:02}-{:02}", month, day),
            HolidayRule::Floating {
                ordinal, weekday, ..
            } => write!(f, "{}-{}", ordinal, weekday_name(*weekday)),
        }
    }
}

/// The `day` field of a holiday entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawHolidayDay {
    /// A fixed day of month.
    Fixed(u32),
    /// A floating rule such as `"first-monday"`.
    Floating(String),
}

/// A holiday entry as written in configuration, before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHoliday {
    /// Display name.
    pub name: String,
    /// Month, 1..=12.
    pub month: u32,
    /// Fixed day or floating rule text.
    pub day: RawHolidayDay,
    /// Optional explanatory text shown alongside the holiday.
    #[serde(default)]
    pub info: Option<String>,
}

impl RawHoliday {
    /// Decodes the entry into a [`HolidayDefinition`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHolidayRule`] naming the holiday if the
    /// month, day, or rule text is invalid.
    pub fn decode(&self) -> EngineResult<HolidayDefinition> {
        let rule = match &self.day {
            RawHolidayDay::Fixed(day) => HolidayRule::fixed(self.month, *day),
            RawHolidayDay::Floating(text) => HolidayRule::parse(self.month, text),
        };

        let rule = rule.map_err(|err| match err {
            EngineError::InvalidHolidayRule { rule, message, .. } => {
                EngineError::InvalidHolidayRule {
                    name: self.name.clone(),
                    rule,
                    message,
                }
            }
            other => other,
        })?;

        Ok(HolidayDefinition {
            name: self.name.clone(),
            rule,
            info: self.info.clone(),
        })
    }
}

/// A named holiday with its decoded rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDefinition {
    /// Display name.
    pub name: String,
    /// How the date is derived.
    pub rule: HolidayRule,
    /// Optional explanatory text.
    pub info: Option<String>,
}

/// The ordered list of configured holidays.
///
/// Order matters: when two rules observe on the same date, the one listed
/// first is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Vec<HolidayDefinition>,
}

impl HolidayCalendar {
    /// Creates a calendar from decoded definitions, keeping their order.
    pub fn new(holidays: Vec<HolidayDefinition>) -> Self {
        Self { holidays }
    }

    /// The eleven US federal holidays.
    pub fn federal() -> Self {
        let fixed = |name: &str, month, day| HolidayDefinition {
            name: name.to_string(),
            rule: HolidayRule::Fixed { month, day },
            info: None,
        };
        let floating = |name: &str, month, ordinal, weekday| HolidayDefinition {
            name: name.to_string(),
            rule: HolidayRule::Floating {
                month,
                ordinal,
                weekday,
            },
            info: None,
        };

        Self::new(vec![
            fixed("New Year's Day", 1, 1),
            floating(
                "Martin Luther King Jr. Day",
                1,
                Ordinal::Nth(3),
                Weekday::Mon,
            ),
            floating("Washington's Birthday", 2, Ordinal::Nth(3), Weekday::Mon),
            floating("Memorial Day", 5, Ordinal::Last, Weekday::Mon),
            fixed("Juneteenth National Independence Day", 6, 19),
            fixed("Independence Day", 7, 4),
            floating("Labor Day", 9, Ordinal::Nth(1), Weekday::Mon),
            floating("Columbus Day", 10, Ordinal::Nth(2), Weekday::Mon),
            fixed("Veterans Day", 11, 11),
            floating("Thanksgiving Day", 11, Ordinal::Nth(4), Weekday::Thu),
            fixed("Christmas Day", 12, 25),
        ])
    }

    /// Returns the definitions in configuration order.
    pub fn holidays(&self) -> &[HolidayDefinition] {
        &self.holidays
    }

    /// Returns the number of configured holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holidays are configured.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// The holiday reported for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInfo {
    /// Display name.
    pub name: String,
    /// Optional explanatory text from configuration.
    pub info: Option<String>,
    /// The date the rule produces before the weekend shift.
    pub actual_date: NaiveDate,
    /// The date the holiday is recognised on.
    pub observed_date: NaiveDate,
}
