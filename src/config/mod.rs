//! Configuration loading for the schedule engine.
//!
//! This module loads the cycle anchors, carrier table, holiday rules,
//! rotation cycle and acronyms from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use mcore_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/mcore").unwrap();
//! println!("Loaded {} holidays", loader.config().holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AcronymsConfig, CarriersConfig, HolidaysConfig, RotationConfig, ScheduleConfig};
