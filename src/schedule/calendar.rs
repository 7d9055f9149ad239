//! Calendar views.
//!
//! Composes the resolvers into per-day cells for a month or a whole year,
//! the data a front end needs to draw the carrier calendar.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::models::{Carrier, HolidayCalendar, HolidayInfo, UserSettings};

use super::carrier_day_off::carriers_off;
use super::dates::{days_in_month, is_sunday, month_name};
use super::holiday::{apply_weekend_observance, candidate_years, resolve_holiday};
use super::letter_schedule::letter_label_for_date;
use super::rotation::label_for_date;

/// Everything a view needs: configuration, the user's settings and,
/// optionally, today's date for highlighting.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleContext<'a> {
    /// Loaded schedule configuration.
    pub config: &'a ScheduleConfig,
    /// Current user settings.
    pub settings: &'a UserSettings,
    /// The date to mark as today.
    pub today: Option<NaiveDate>,
}

impl<'a> ScheduleContext<'a> {
    /// Creates a context without a current date.
    pub fn new(config: &'a ScheduleConfig, settings: &'a UserSettings) -> Self {
        Self {
            config,
            settings,
            today: None,
        }
    }

    /// Sets the date marked as today.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The selected carrier, `None` when nothing (or "all", or an unknown
    /// colour) is selected.
    pub fn selected_carrier(&self) -> Option<&'a Carrier> {
        self.settings
            .selected_carrier
            .as_deref()
            .and_then(|id| self.config.carriers().get(id))
    }
}

/// One day of a calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The calendar date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Sundays are off for every carrier.
    pub is_sunday: bool,
    /// Whether this is the context's current date.
    pub is_today: bool,
    /// Ids of the carriers off on this day. Only the selected carrier is
    /// considered when one is selected.
    pub carriers_off: Vec<String>,
    /// The observed holiday on this day, if any.
    pub holiday: Option<HolidayInfo>,
    /// The T6 route label, if one applies.
    pub route_label: Option<String>,
    /// The letter schedule label, if one applies.
    pub letter_label: Option<String>,
}

impl DayCell {
    /// True when any carrier in view is off.
    pub fn is_day_off(&self) -> bool {
        !self.carriers_off.is_empty()
    }
}

/// A month of day cells laid out for a Monday-first grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1..=12.
    pub month: u32,
    /// English month name.
    pub name: String,
    /// Empty grid cells before the 1st when weeks start on Monday.
    pub leading_blanks: u32,
    /// One cell per day of the month.
    pub days: Vec<DayCell>,
}

/// Holidays observed in one calendar year, keyed by observed date.
///
/// Built once per view so each cell is a map lookup. When two rules land on
/// the same date the earlier rule in configuration order is kept.
struct YearHolidays {
    by_date: HashMap<NaiveDate, HolidayInfo>,
}

impl YearHolidays {
    fn new(calendar: &HolidayCalendar, year: i32) -> Self {
        let mut by_date = HashMap::new();
        for definition in calendar.holidays() {
            for rule_year in candidate_years(year) {
                let Some(actual_date) = resolve_holiday(&definition.rule, rule_year) else {
                    continue;
                };
                let observed_date = apply_weekend_observance(actual_date);
                if observed_date.year() != year {
                    continue;
                }
                by_date.entry(observed_date).or_insert_with(|| HolidayInfo {
                    name: definition.name.clone(),
                    info: definition.info.clone(),
                    actual_date,
                    observed_date,
                });
            }
        }
        Self { by_date }
    }

    fn get(&self, date: NaiveDate) -> Option<HolidayInfo> {
        self.by_date.get(&date).cloned()
    }
}

/// Builds the view of one month, `None` if `month` is not 1..=12.
///
/// # Example
///
/// ```
/// use mcore_engine::config::ScheduleConfig;
/// use mcore_engine::models::UserSettings;
/// use mcore_engine::schedule::{month_view, ScheduleContext};
///
/// let config = ScheduleConfig::standard();
/// let settings = UserSettings::default();
/// let ctx = ScheduleContext::new(&config, &settings);
///
/// let july = month_view(2025, 7, &ctx).unwrap();
/// assert_eq!(july.name, "July");
/// assert_eq!(july.leading_blanks, 1); // July 1, 2025 is a Tuesday
/// assert_eq!(july.days[3].holiday.as_ref().map(|h| h.name.as_str()), Some("Independence Day"));
/// ```
pub fn month_view(year: i32, month: u32, ctx: &ScheduleContext<'_>) -> Option<MonthView> {
    let holidays = YearHolidays::new(ctx.config.holidays(), year);
    build_month(year, month, ctx, &holidays)
}

/// Builds all twelve months of a year, resolving holidays once.
pub fn year_view(year: i32, ctx: &ScheduleContext<'_>) -> Vec<MonthView> {
    let holidays = YearHolidays::new(ctx.config.holidays(), year);
    (1..=12)
        .filter_map(|month| build_month(year, month, ctx, &holidays))
        .collect()
}

fn build_month(
    year: i32,
    month: u32,
    ctx: &ScheduleContext<'_>,
    holidays: &YearHolidays,
) -> Option<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_count = days_in_month(year, month)?;
    let name = month_name(month)?;

    let days = first
        .iter_days()
        .take(day_count as usize)
        .map(|date| build_day(date, ctx, holidays))
        .collect();

    Some(MonthView {
        year,
        month,
        name: name.to_string(),
        leading_blanks: first.weekday().num_days_from_monday(),
        days,
    })
}

fn build_day(date: NaiveDate, ctx: &ScheduleContext<'_>, holidays: &YearHolidays) -> DayCell {
    let config = ctx.config;
    let settings = ctx.settings;
    let anchors = config.anchors();

    let selected = ctx.selected_carrier();
    let carriers_off = carriers_off(date, config.carriers(), anchors)
        .into_iter()
        .filter(|carrier| selected.is_none_or(|s| s.id == carrier.id))
        .map(|carrier| carrier.id.clone())
        .collect();

    DayCell {
        date,
        weekday: date.weekday(),
        is_sunday: is_sunday(date),
        is_today: ctx.today == Some(date),
        carriers_off,
        holiday: holidays.get(date),
        route_label: label_for_date(
            date,
            config.rotation(),
            &settings.t6_routes,
            settings.label_policy,
            anchors,
        ),
        letter_label: letter_label_for_date(
            date,
            &settings.letter_routes,
            settings.label_policy,
            anchors,
        ),
    }
}
