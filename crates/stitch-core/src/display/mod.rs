//! Display formatting wrappers and result types.
//!
//! This module provides wrapper types for scenario collections, calendar
//! dates, and action outcomes, enabling consistent formatting across
//! different output contexts (lists, schedule overviews, mutations).
//!
//! # Architecture: Display Wrappers
//!
//! Domain models implement [`std::fmt::Display`] for their standalone form;
//! wrapper types carry the context a bare model cannot know, such as a
//! scenario's position and markers in the full listing or whether a mutation
//! actually changed the schedule.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (Scenario,      │───▶│ (ScenarioList,  │───▶│    Output       │
//! │  Schedule)      │    │  ActionOutcome) │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Scenario collection wrapper (ScenarioList)
//! - [`results`]: Action outcome wrapper (ActionOutcome)
//! - [`datetime`]: Calendar date formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ### Scenario Listings
//!
//! ```rust
//! use jiff::civil::date;
//! use stitch_core::{enumerate_scenarios, RecommendationPolicy, ScenarioList};
//!
//! let policy = RecommendationPolicy::default();
//! let scenarios = enumerate_scenarios(Some(date(2025, 1, 6)), &policy);
//!
//! let list = ScenarioList::new(scenarios, policy.recommended_id(), None);
//! let output = format!("{}", list);
//! assert!(output.contains("★ recommended"));
//!
//! // Empty listings explain themselves instead of rendering nothing
//! let empty = ScenarioList::new(Vec::new(), policy.recommended_id(), None);
//! assert!(format!("{}", empty).contains("No scenarios available."));
//! ```
//!
//! ### Action Outcomes
//!
//! ```rust
//! use stitch_core::ActionOutcome;
//!
//! // Mutations that changed the schedule
//! let outcome = ActionOutcome::applied("Selected scenario photo-1-physical-normal");
//! println!("{}", outcome);
//!
//! // No-ops stay visible at the interface layer
//! let outcome = ActionOutcome::no_change("Revision 7 not found");
//! println!("{}", outcome);
//! ```
//!
//! All formatters produce markdown; the terminal renderer and the MCP text
//! content consume the same strings. Optional configuration chains on the
//! wrapper (e.g. [`ScenarioList::with_speed`]).

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::ScenarioList;
pub use datetime::CalendarDate;
pub use results::ActionOutcome;
