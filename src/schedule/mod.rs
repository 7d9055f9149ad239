//! Schedule resolution for the mCORE engine.
//!
//! This module contains the pure resolvers that answer date questions from
//! the cycle anchors and configuration: federal holiday observance, carrier
//! rotating days off, postal work weeks, pay periods, T6 route rotation and
//! the letter schedule. The calendar views compose them per day.

mod calendar;
mod carrier_day_off;
mod dates;
mod holiday;
mod letter_schedule;
mod pay_period;
mod rotation;
mod work_week;

pub use calendar::{DayCell, MonthView, ScheduleContext, month_view, year_view};
pub use carrier_day_off::{
    carriers_off, is_carrier_day_off, is_carrier_id_day_off, rotating_day_off,
    rotating_day_off_index,
};
pub use dates::{calendar_day, days_between, days_in_month, is_sunday, month_name, weekday_name};
pub use holiday::{
    ObservedHoliday, apply_weekend_observance, holidays_observed_in_year, is_holiday,
    observed_holidays, resolve_holiday,
};
pub use letter_schedule::{letter_carrier, letter_label_for_date, letter_slot};
pub use pay_period::{pay_period_by_number, pay_period_info, pay_periods_for_year};
pub use rotation::{label_for_date, rotation_slot};
pub use work_week::{work_week_number, work_week_start};
