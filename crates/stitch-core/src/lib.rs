//! Core library for the Stitch delivery scheduling engine.
//!
//! This crate provides the scheduling logic for quoting made-to-order plush
//! deliveries: the fixed stage duration table, the 28-way scenario
//! enumerator with its recommendation policy, the session reducer for
//! selection and manual overrides, and the timeline projection with its
//! delivery-risk check.
//!
//! # Display Architecture
//!
//! All human-facing output is markdown built inside this crate:
//!
//! - [`models`] implement [`std::fmt::Display`] for their standalone form
//!   (a scenario detail block, the schedule overview with its timeline)
//! - [`display`] wrappers add listing context and outcome icons
//!   ([`ScenarioList`], [`ActionOutcome`], [`CalendarDate`])
//!
//! The CLI renders these strings through termimad; the MCP server returns
//! them as tool text content unchanged.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use stitch_core::{ScenarioList, Session};
//!
//! // One session per quote-drafting interaction
//! let mut session = Session::new();
//! session.set_order_date(Some(date(2025, 1, 6)));
//! session.set_event_date(Some(date(2025, 3, 1)));
//!
//! // All 28 scenarios, recommended first and already applied
//! assert_eq!(session.scenarios().len(), 28);
//! assert_eq!(session.timeline().total_weeks, 9);
//! assert!(session.is_at_risk());
//!
//! // Render the list for the terminal
//! let list = ScenarioList::new(
//!     session.scenarios().to_vec(),
//!     session.policy().recommended_id(),
//!     session.schedule().selected_scenario_id.clone(),
//! );
//! println!("{list}");
//!
//! // Override a stage; the selection drops and totals recompute
//! session.add_revision();
//! assert_eq!(session.timeline().total_weeks, 9 + 1);
//! ```

pub mod display;
pub mod durations;
pub mod enumerate;
pub mod error;
pub mod models;
pub mod params;
pub mod policy;
pub mod session;

// Re-export commonly used types
pub use display::{ActionOutcome, CalendarDate, ScenarioList};
pub use enumerate::enumerate_scenarios;
pub use error::{Result, ScheduleError};
pub use models::{
    ConfirmationMethod, ProductionSpeed, Revision, Scenario, Schedule, StageKind, StageSlot,
    Timeline,
};
pub use params::{
    EventDate, OrderDate, RevisionId, RevisionMethod, SampleMethod, ScenarioQuery, ScheduleSpec,
    SelectScenario, Speed,
};
pub use policy::RecommendationPolicy;
pub use session::{Action, Session};
