//! Error types for the scheduling library.

use thiserror::Error;

/// Comprehensive error type for all scheduling operations.
///
/// The scheduling core itself never fails: missing dates produce empty
/// results and out-of-range edits are no-ops. These errors exist for the
/// interface layer, where unparseable input or a mistyped scenario id must
/// surface instead of silently doing nothing.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Scenario not found for the given id
    #[error("Scenario with id '{id}' not found")]
    ScenarioNotFound { id: String },
    /// Selection attempted while no scenarios are available
    #[error("No scenarios available: set an order date first")]
    NoScenarios,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a scenario-not-found error for an id.
    pub fn scenario_not_found(id: impl Into<String>) -> Self {
        Self::ScenarioNotFound { id: id.into() }
    }
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
