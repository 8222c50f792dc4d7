//! Data models for schedules, scenarios, and timelines.
//!
//! The core domain models of the delivery scheduling engine. Their Display
//! implementations live in [`crate::display::models`]; nothing in this
//! module knows about formatting.
//!
//! # Model Roles
//!
//! - [`Schedule`]: the mutable planning state of one quote-drafting session
//!   (dates, stage choices, revision entries, selection tracking).
//! - [`Scenario`]: an immutable enumerated candidate plan with its computed
//!   total and end date.
//! - [`Timeline`]: the derived per-stage projection of a schedule, rebuilt
//!   from scratch on every read.
//! - Choice enums ([`ConfirmationMethod`], [`ProductionSpeed`],
//!   [`StageKind`]): lowercase-token serialization plus `FromStr` for
//!   interface input.
//!
//! Every derived value (total weeks, end date, per-stage offsets, the
//! at-risk flag) is a pure function of the schedule's current fields; the
//! models never cache a derivation across mutations.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stitch_core::models::{Schedule, Timeline};
//!
//! let schedule = Schedule {
//!     order_date: Some(date(2025, 1, 6)),
//!     ..Default::default()
//! };
//!
//! let timeline = Timeline::project(&schedule);
//! assert_eq!(timeline.total_weeks, 7); // photo sample + normal production
//! assert_eq!(timeline.end_date, Some(date(2025, 2, 24)));
//! ```

pub mod choices;
pub mod revision;
pub mod scenario;
pub mod schedule;
pub mod timeline;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use choices::{ConfirmationMethod, ProductionSpeed, StageKind};
pub use revision::Revision;
pub use scenario::Scenario;
pub use schedule::Schedule;
pub use timeline::{StageSlot, Timeline};
