//! Result wrapper types for displaying action outcomes.
//!
//! This module provides the wrapper type that formats the outcome of
//! state-changing session actions with consistent one-line messaging.

use std::fmt;

/// Outcome of one state-changing action against a session.
///
/// The scheduling core deliberately treats out-of-range edits (adding past
/// the revision cap, removing an unknown revision id, re-setting a value)
/// as silent no-ops. The interface layer wraps every mutation in this type
/// so a no-op still surfaces as an explicit "no change" line instead of
/// vanishing.
///
/// # Examples
///
/// ```rust
/// use stitch_core::ActionOutcome;
///
/// let applied = ActionOutcome::applied("Added revision 1 (photo)");
/// assert_eq!(format!("{}", applied), "✓ Added revision 1 (photo)\n");
///
/// let skipped = ActionOutcome::no_change("Revision cap reached");
/// assert_eq!(format!("{}", skipped), "· Revision cap reached\n");
/// ```
pub enum ActionOutcome {
    /// The action changed the schedule
    Applied(String),
    /// The action left the schedule untouched
    NoChange(String),
}

impl ActionOutcome {
    /// Wrap a mutation that changed the schedule.
    pub fn applied(message: impl Into<String>) -> Self {
        Self::Applied(message.into())
    }

    /// Wrap a mutation that was a no-op.
    pub fn no_change(message: impl Into<String>) -> Self {
        Self::NoChange(message.into())
    }

    /// Whether the action changed the schedule.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The wrapped message without its icon.
    pub fn message(&self) -> &str {
        match self {
            Self::Applied(message) | Self::NoChange(message) => message,
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied(message) => writeln!(f, "✓ {message}"),
            Self::NoChange(message) => writeln!(f, "· {message}"),
        }
    }
}
