//! Core data models for the schedule engine.
//!
//! This module contains the configuration and value types the resolvers
//! read and produce.

mod acronym;
mod anchors;
mod carrier;
mod holiday;
mod pay_period;
mod rotation;
mod settings;

pub use acronym::{Acronym, AcronymTable, SortOrder};
pub use anchors::{CycleAnchors, PAY_PERIODS_PER_YEAR};
pub use carrier::{ALL_CARRIERS_ID, Carrier, CarrierTable, ROTATION_DAYS};
pub use holiday::{
    HolidayCalendar, HolidayDefinition, HolidayInfo, HolidayRule, Ordinal, RawHoliday,
    RawHolidayDay,
};
pub use pay_period::{PAY_DATE_OFFSET_DAYS, PAY_PERIOD_DAYS, PayPeriod};
pub use rotation::{
    LETTER_ROUTE_COUNT, LabelPolicy, RotationCycle, RouteSet, T6_CYCLE_DAYS, T6_ROUTE_COUNT,
};
pub use settings::UserSettings;
