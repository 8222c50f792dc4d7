//! Schedule aggregate owned by one quote-drafting session.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ConfirmationMethod, ProductionSpeed, Revision};

/// The user-facing planning state for one delivery quote.
///
/// Holds the raw inputs (dates, stage choices, revision entries) plus the
/// selection tracking pair. Derived values (totals, end date, per-stage
/// offsets) are never stored here; they are recomputed by
/// [`Timeline::project`](super::Timeline::project) on every read so they can
/// never go stale.
///
/// Invariant: while `selected_scenario_id` is set, the choice fields and
/// revision methods equal the identified scenario's values. The reducer
/// clears the selection the moment any choice field is edited directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Date production can begin (drives scenario enumeration)
    pub order_date: Option<Date>,

    /// Date the customer needs the order delivered (risk comparison only)
    pub event_date: Option<Date>,

    /// How the initial sample is confirmed
    pub initial_sample_method: ConfirmationMethod,

    /// Revision rounds in execution order, capped at [`Self::MAX_REVISIONS`]
    pub revisions: Vec<Revision>,

    /// Production run speed
    pub production_speed: ProductionSpeed,

    /// Id of the currently applied scenario, if any
    pub selected_scenario_id: Option<String>,

    /// True once the user has edited stages directly (no scenario applied)
    pub manually_modified: bool,

    /// Next id handed out to a new revision entry (monotonic per session)
    pub next_revision_id: u64,
}

impl Schedule {
    /// Maximum number of revision rounds per schedule.
    pub const MAX_REVISIONS: usize = 2;

    /// Create a schedule with default choices and no dates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmation methods of the revision entries, in execution order.
    pub fn revision_methods(&self) -> Vec<ConfirmationMethod> {
        self.revisions.iter().map(|r| r.method).collect()
    }

    /// Look up a revision entry by its stable id.
    pub fn revision(&self, id: u64) -> Option<&Revision> {
        self.revisions.iter().find(|r| r.id == id)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            order_date: None,
            event_date: None,
            initial_sample_method: ConfirmationMethod::default(),
            revisions: Vec::new(),
            production_speed: ProductionSpeed::default(),
            selected_scenario_id: None,
            manually_modified: false,
            next_revision_id: 1,
        }
    }
}
