//! Planning session: the stateful shell around the pure engine.
//!
//! This module provides the main [`Session`] interface for one quote-drafting
//! interaction. The session owns the single mutable [`Schedule`], the current
//! scenario list, and the auto-selection latch; everything else is pure.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Session     │    │     Reducer     │    │   Projections   │
//! │ (latch, scenario│───▶│ (apply: Schedule│───▶│ (enumerate,     │
//! │  cache)         │    │  × Action)      │    │  Timeline)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Stateful shell       Pure transitions       Pure derivations
//! ```
//!
//! ## Submodules
//!
//! - [`actions`]: the [`Action`] vocabulary of user interactions
//! - [`reducer`]: the pure `(Schedule, Action) -> Schedule` transition
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: one session per editing interaction, no shared
//!    mutable state anywhere else
//! 2. **Full Recomputation**: every mutation re-derives scenarios and
//!    timeline from scratch; 28 scenarios are cheap, staleness is not
//! 3. **No-op Edges**: invalid interactions never error and never corrupt
//!    state
//! 4. **One-shot Recommendation**: auto-selection fires at most once per
//!    planning round and never clobbers user choices
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stitch_core::Session;
//!
//! let mut session = Session::new();
//! session.set_order_date(Some(date(2025, 1, 6)));
//!
//! // The recommended scenario was auto-selected.
//! assert_eq!(
//!     session.schedule().selected_scenario_id.as_deref(),
//!     Some("photo-1-physical-normal")
//! );
//! assert_eq!(session.timeline().total_weeks, 9);
//!
//! // Hand-editing a stage drops back to manual planning.
//! session.add_revision();
//! assert!(session.schedule().manually_modified);
//! assert_eq!(session.schedule().selected_scenario_id, None);
//! ```

use jiff::civil::Date;

use crate::enumerate::enumerate_scenarios;
use crate::models::{ConfirmationMethod, ProductionSpeed, Scenario, Schedule, Timeline};
use crate::policy::RecommendationPolicy;

// Module declarations
pub mod actions;
pub mod reducer;


// Re-export the main types
pub use actions::Action;

/// One user's quote-drafting session.
///
/// Owns the schedule and the scenario list derived from its order date.
/// All mutation goes through [`Session::dispatch`]; the convenience methods
/// are one-line wrappers over it.
#[derive(Debug, Clone)]
pub struct Session {
    schedule: Schedule,
    scenarios: Vec<Scenario>,
    policy: RecommendationPolicy,
    auto_select_done: bool,
}

impl Session {
    /// Create a session with the default recommendation policy.
    pub fn new() -> Self {
        Self::with_policy(RecommendationPolicy::default())
    }

    /// Create a session with a custom recommendation policy.
    pub fn with_policy(policy: RecommendationPolicy) -> Self {
        Self {
            schedule: Schedule::new(),
            scenarios: Vec::new(),
            policy,
            auto_select_done: false,
        }
    }

    /// Apply one action and reconcile derived state.
    ///
    /// Order-date changes regenerate the scenario list. Setting the first
    /// order date of a planning round also auto-selects the recommended
    /// scenario, unless the user already picked one or edited stages by
    /// hand. Clearing the date starts a fresh round and re-arms that latch.
    pub fn dispatch(&mut self, action: Action) {
        let order_date_changes =
            matches!(&action, Action::SetOrderDate(date) if *date != self.schedule.order_date);

        self.schedule = reducer::apply(&self.schedule, &self.scenarios, action);

        if order_date_changes {
            self.scenarios = enumerate_scenarios(self.schedule.order_date, &self.policy);
            if self.schedule.order_date.is_none() {
                self.auto_select_done = false;
            } else {
                self.maybe_auto_select();
            }
        }
    }

    fn maybe_auto_select(&mut self) {
        if self.auto_select_done {
            return;
        }
        self.auto_select_done = true;

        if self.schedule.manually_modified || self.schedule.selected_scenario_id.is_some() {
            return;
        }
        let recommended = self.policy.recommended_id();
        if self.scenarios.iter().any(|s| s.id == recommended) {
            self.schedule = reducer::apply(
                &self.schedule,
                &self.scenarios,
                Action::SelectScenario(Some(recommended)),
            );
        }
    }

    /// Set or clear the production start date.
    pub fn set_order_date(&mut self, date: Option<Date>) {
        self.dispatch(Action::SetOrderDate(date));
    }

    /// Set or clear the desired delivery date.
    pub fn set_event_date(&mut self, date: Option<Date>) {
        self.dispatch(Action::SetEventDate(date));
    }

    /// Directly choose the initial sample confirmation method.
    pub fn set_initial_sample_method(&mut self, method: ConfirmationMethod) {
        self.dispatch(Action::SetInitialSampleMethod(method));
    }

    /// Directly choose the production speed.
    pub fn set_production_speed(&mut self, speed: ProductionSpeed) {
        self.dispatch(Action::SetProductionSpeed(speed));
    }

    /// Append a revision round (no-op at the cap).
    pub fn add_revision(&mut self) {
        self.dispatch(Action::AddRevision);
    }

    /// Remove a revision round by id (no-op when unknown).
    pub fn remove_revision(&mut self, id: u64) {
        self.dispatch(Action::RemoveRevision(id));
    }

    /// Change the confirmation method of one revision round.
    pub fn set_revision_method(&mut self, id: u64, method: ConfirmationMethod) {
        self.dispatch(Action::SetRevisionMethod { id, method });
    }

    /// Apply a scenario by id, or deselect with `None`.
    pub fn select_scenario(&mut self, id: Option<String>) {
        self.dispatch(Action::SelectScenario(id));
    }

    /// The current schedule state.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The scenario list for the current order date, in display order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// The recommendation policy this session was built with.
    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Project the derived timeline from the current schedule.
    pub fn timeline(&self) -> Timeline {
        Timeline::project(&self.schedule)
    }

    /// Whether the desired delivery date precedes the computed completion.
    pub fn is_at_risk(&self) -> bool {
        self.timeline().at_risk
    }

    /// Look up a scenario in the current list by id.
    pub fn find_scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// The currently applied scenario, if any.
    pub fn selected_scenario(&self) -> Option<&Scenario> {
        self.schedule
            .selected_scenario_id
            .as_deref()
            .and_then(|id| self.find_scenario(id))
    }

    /// Zero-based position of the applied scenario in the display order.
    pub fn selected_scenario_index(&self) -> Option<usize> {
        self.schedule
            .selected_scenario_id
            .as_deref()
            .and_then(|id| self.scenarios.iter().position(|s| s.id == id))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
