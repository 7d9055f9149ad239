//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading schedule
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AcronymTable, CarrierTable, CycleAnchors, HolidayCalendar, RawHoliday, RotationCycle,
};

use super::types::{
    AcronymsConfig, CarriersConfig, HolidaysConfig, RotationConfig, ScheduleConfig,
};

/// Loads and provides access to schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/mcore/
/// ├── anchors.yaml    # Pay period, work week and rotation epochs
/// ├── carriers.yaml   # The six carrier colours and their offsets
/// ├── holidays.yaml   # Holiday rules, in priority order
/// ├── rotation.yaml   # Route rotation cycle map
/// └── acronyms.yaml   # Acronym lookup (optional)
/// ```
///
/// Holiday entries whose rule cannot be decoded are skipped with a warning
/// instead of failing the load, so one bad entry never hides the others.
///
/// # Example
///
/// ```no_run
/// use mcore_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/mcore")?;
/// let blue = loader.config().carriers().get("blue");
/// assert!(blue.is_some());
/// # Ok::<(), mcore_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ScheduleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The anchors, carrier table or rotation cycle fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let anchors = Self::load_yaml::<CycleAnchors>(&path.join("anchors.yaml"))?;
        anchors.validate()?;

        let carriers_config = Self::load_yaml::<CarriersConfig>(&path.join("carriers.yaml"))?;
        let carriers = CarrierTable::new(carriers_config.carriers)?;

        let holidays_config = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;
        let holidays = Self::decode_holidays(&holidays_config.holidays);

        let rotation_config = Self::load_yaml::<RotationConfig>(&path.join("rotation.yaml"))?;
        let rotation = RotationCycle::new(rotation_config.cycle, rotation_config.slot_count)?;

        let acronyms_path = path.join("acronyms.yaml");
        let acronyms = if acronyms_path.exists() {
            AcronymTable::new(Self::load_yaml::<AcronymsConfig>(&acronyms_path)?.acronyms)
        } else {
            AcronymTable::default()
        };

        info!(
            path = %path.display(),
            holidays = holidays.len(),
            cycle_days = rotation.len(),
            acronyms = acronyms.len(),
            "Loaded schedule configuration"
        );

        Ok(Self {
            config: ScheduleConfig::new(anchors, carriers, holidays, rotation, acronyms),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Decodes holiday entries, keeping their order and dropping malformed ones.
    fn decode_holidays(raw: &[RawHoliday]) -> HolidayCalendar {
        let holidays = raw
            .iter()
            .filter_map(|entry| match entry.decode() {
                Ok(definition) => Some(definition),
                Err(err) => {
                    warn!(holiday = %entry.name, error = %err, "Skipping holiday rule");
                    None
                }
            })
            .collect();

        HolidayCalendar::new(holidays)
    }

    /// Returns the underlying schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ScheduleConfig {
        self.config
    }
}
