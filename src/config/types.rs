//! Configuration types for the schedule engine.
//!
//! This module contains the file structures deserialized from YAML and the
//! validated [`ScheduleConfig`] they are assembled into.

use serde::Deserialize;

use crate::models::{
    Acronym, AcronymTable, Carrier, CarrierTable, CycleAnchors, HolidayCalendar, RawHoliday,
    RotationCycle,
};

/// Structure of `carriers.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CarriersConfig {
    /// The six carrier colours.
    pub carriers: Vec<Carrier>,
}

/// Structure of `holidays.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Holiday entries in priority order.
    pub holidays: Vec<RawHoliday>,
}

/// Structure of `rotation.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RotationConfig {
    /// Number of route slots the cycle assigns.
    pub slot_count: usize,
    /// Slot for each day of the cycle; `null` for unassigned days.
    pub cycle: Vec<Option<usize>>,
}

/// Structure of `acronyms.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AcronymsConfig {
    /// Acronym entries.
    pub acronyms: Vec<Acronym>,
}

/// The complete, validated schedule configuration.
///
/// Immutable once built; share it behind an `Arc` between callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    anchors: CycleAnchors,
    carriers: CarrierTable,
    holidays: HolidayCalendar,
    rotation: RotationCycle,
    acronyms: AcronymTable,
}

impl ScheduleConfig {
    /// Creates a configuration from its already-validated parts.
    pub fn new(
        anchors: CycleAnchors,
        carriers: CarrierTable,
        holidays: HolidayCalendar,
        rotation: RotationCycle,
        acronyms: AcronymTable,
    ) -> Self {
        Self {
            anchors,
            carriers,
            holidays,
            rotation,
            acronyms,
        }
    }

    /// The compiled-in configuration: default anchors, standard carrier
    /// colours, US federal holidays, and the T6 cycle. No acronyms.
    pub fn standard() -> Self {
        Self::new(
            CycleAnchors::default(),
            CarrierTable::standard(),
            HolidayCalendar::federal(),
            RotationCycle::t6(),
            AcronymTable::default(),
        )
    }

    /// Returns the cycle anchors.
    pub fn anchors(&self) -> &CycleAnchors {
        &self.anchors
    }

    /// Returns the carrier table.
    pub fn carriers(&self) -> &CarrierTable {
        &self.carriers
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns the route rotation cycle.
    pub fn rotation(&self) -> &RotationCycle {
        &self.rotation
    }

    /// Returns the acronym table.
    pub fn acronyms(&self) -> &AcronymTable {
        &self.acronyms
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::standard()
    }
}
