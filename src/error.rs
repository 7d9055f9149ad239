//! Error types for the schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only arise while loading or validating configuration and while
//! decoding queries; the resolvers themselves report "no answer" with
//! `Option::None` or `false` and never fail.

use thiserror::Error;

/// The main error type for the schedule engine.
///
/// # Example
///
/// ```
/// use mcore_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The cycle anchors are inconsistent.
    #[error("Invalid cycle anchors: {message}")]
    InvalidAnchors {
        /// A description of what made the anchors invalid.
        message: String,
    },

    /// A holiday rule could not be decoded.
    #[error("Invalid holiday rule '{rule}' for '{name}': {message}")]
    InvalidHolidayRule {
        /// The holiday name.
        name: String,
        /// The rule text as written in the configuration.
        rule: String,
        /// A description of the decoding failure.
        message: String,
    },

    /// The carrier table is not a permutation of the six rotation offsets.
    #[error("Invalid carrier table: {message}")]
    InvalidCarrierTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// The rotation cycle map is empty or refers to unknown slots.
    #[error("Invalid rotation cycle: {message}")]
    InvalidRotationCycle {
        /// A description of what made the cycle invalid.
        message: String,
    },

    /// A route set has the wrong number of labels.
    #[error("Invalid route set: expected {expected} labels, got {actual}")]
    InvalidRouteSet {
        /// The number of labels the set must hold.
        expected: usize,
        /// The number of labels supplied.
        actual: usize,
    },

    /// A query could not be answered because its parameters are invalid.
    #[error("Invalid query: {message}")]
    InvalidQuery {
        /// A description of the invalid parameter.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_holiday_rule_displays_name_and_rule() {
        let error = EngineError::InvalidHolidayRule {
            name: "Labor Day".to_string(),
            rule: "firts-monday".to_string(),
            message: "unknown ordinal 'firts'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid holiday rule 'firts-monday' for 'Labor Day': unknown ordinal 'firts'"
        );
    }

    #[test]
    fn test_invalid_route_set_displays_counts() {
        let error = EngineError::InvalidRouteSet {
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Invalid route set: expected 5 labels, got 3"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_anchors() -> EngineResult<()> {
            Err(EngineError::InvalidAnchors {
                message: "work week epoch must be a Saturday".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_anchors()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
