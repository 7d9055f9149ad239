//! Session state for the schedule query surface.
//!
//! This module defines the state built once at startup and passed to every
//! request handler.

use std::sync::Arc;

use crate::config::{ConfigLoader, ScheduleConfig};
use crate::models::UserSettings;

/// Shared application state.
///
/// Holds the loaded configuration, shared by `Arc` so clones are cheap, and
/// the current user's settings.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded schedule configuration.
    config: Arc<ScheduleConfig>,
    /// The user's persisted settings.
    settings: UserSettings,
}

impl AppState {
    /// Creates a new application state from a configuration loader, with
    /// default settings.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config.into_config()),
            settings: UserSettings::default(),
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: UserSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Updates the current settings.
    pub fn set_settings(&mut self, settings: UserSettings) {
        self.settings = settings;
    }
}
