//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use stitch_core::ScheduleError;

/// Map a scheduling error onto the MCP error surface.
///
/// Every current variant is a validation failure the model can repair by
/// fixing its arguments, so they all surface as invalid-params with the
/// offending field or id in the message.
pub fn to_mcp_error(context: &str, error: &ScheduleError) -> ErrorData {
    match error {
        ScheduleError::InvalidInput { .. }
        | ScheduleError::ScenarioNotFound { .. }
        | ScheduleError::NoScenarios => {
            ErrorData::invalid_params(format!("{context}: {error}"), None)
        }
    }
}
