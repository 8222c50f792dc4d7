//! Revision stage entries owned by a schedule.

use serde::{Deserialize, Serialize};

use super::ConfirmationMethod;

/// One revision round within a schedule's pipeline.
///
/// Identified by a stable id distinct from its position. Ids come from the
/// owning session's monotonic counter, stay unique for the whole session,
/// and never change for the lifetime of the entry. Insertion order is
/// execution order; reordering is not supported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Revision {
    /// Stable identifier for the revision entry
    pub id: u64,

    /// How this revision round is confirmed
    pub method: ConfirmationMethod,
}

impl Revision {
    /// Create a revision entry with the given id and method.
    pub fn new(id: u64, method: ConfirmationMethod) -> Self {
        Self { id, method }
    }
}
