//! Error types for the take-home pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data,
//! validating inputs, and managing saved scenarios.

use thiserror::Error;

/// The main error type for the take-home pay engine.
///
/// All fallible operations in the engine return this error type. Degenerate
/// but valid calculations (for example a FIFO roster with no complete cycle in
/// a year) are never errors; they are reported as zeroed result fields.
///
/// # Example
///
/// ```
/// use take_home_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
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

    /// The tax bracket table does not partition [0, ∞) contiguously.
    #[error("Invalid tax table: {message}")]
    InvalidTaxTable {
        /// A description of the inconsistency.
        message: String,
    },

    /// A calculation input was outside its permitted range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Trade preset id was not found in the catalog.
    #[error("Trade preset not found: {id}")]
    PresetNotFound {
        /// The preset id that was not found.
        id: String,
    },

    /// Saved scenario id was not found in the comparison session.
    #[error("Saved scenario not found: {id}")]
    ScenarioNotFound {
        /// The scenario id that was not found.
        id: String,
    },

    /// The comparison session already holds the maximum number of scenarios.
    #[error("Cannot save more than {limit} scenarios for comparison")]
    ScenarioLimitReached {
        /// The maximum number of saved scenarios.
        limit: usize,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
