//! Parameter structures for Stitch operations
//!
//! Shared parameter structs for every interface (CLI, MCP) that drives the
//! scheduling core. They carry dates and choice tokens as plain strings;
//! their `validate()` methods parse them into domain types and report
//! failures as [`ScheduleError::InvalidInput`](crate::ScheduleError) naming
//! the offending field.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! The core structs sit at the end of a wrapper chain; each interface
//! converts its own framework types into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The core structs carry no clap or schemars derives of their own; JSON
//! schema generation sits behind the `schema` feature, enabled only by the
//! MCP layer. Both interfaces funnel raw strings through the same
//! `validate()` methods, so a bad date or an unknown method token produces
//! the identical field-named error everywhere.
//!
//! ### Usage Pattern
//!
//! Interface layers create wrapper structs that:
//! - Add framework-specific derives (clap::Args, schemars::JsonSchema, etc.)
//! - Use transparent serialization (`#[serde(transparent)]`)
//! - Convert to core parameters via `.into()` or accessor methods
//!
//! ```ignore
//! // In CLI module
//! #[derive(Args)]
//! pub struct ScenariosArgs {
//!     #[arg(long)]
//!     pub order_date: Option<String>,
//!     // ... clap-specific attributes
//! }
//!
//! impl From<ScenariosArgs> for ScenarioQuery {
//!     fn from(args: ScenariosArgs) -> Self {
//!         ScenarioQuery {
//!             order_date: args.order_date,
//!             speed: args.speed,
//!         }
//!     }
//! }
//!
//! // In MCP module
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct ScenarioQueryRequest(stitch_core::params::ScenarioQuery);
//! ```

use std::str::FromStr;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{ConfirmationMethod, ProductionSpeed, Schedule};
use crate::ScheduleError;

/// Parse an ISO `YYYY-MM-DD` date, reporting the field name on failure.
fn parse_date(field: &str, value: &str) -> crate::Result<Date> {
    value.parse().map_err(|_| {
        ScheduleError::invalid_input(field)
            .with_reason(format!("Invalid date: {value}. Use YYYY-MM-DD, e.g. 2025-01-06"))
    })
}

/// Parse a confirmation method token, reporting the field name on failure.
fn parse_method(field: &str, value: &str) -> crate::Result<ConfirmationMethod> {
    ConfirmationMethod::from_str(value).map_err(|_| {
        ScheduleError::invalid_input(field)
            .with_reason(format!("Invalid method: {value}. Must be 'photo' or 'physical'"))
    })
}

/// Parse a production speed token, reporting the field name on failure.
fn parse_speed(field: &str, value: &str) -> crate::Result<ProductionSpeed> {
    ProductionSpeed::from_str(value).map_err(|_| {
        ScheduleError::invalid_input(field)
            .with_reason(format!("Invalid speed: {value}. Must be 'normal' or 'express'"))
    })
}

/// Parameters for setting or clearing the production start date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct OrderDate {
    /// Production start date in `YYYY-MM-DD` format; omit to clear it
    pub order_date: Option<String>,
}

impl OrderDate {
    /// Parse the date string, if present.
    pub fn validate(&self) -> crate::Result<Option<Date>> {
        self.order_date
            .as_deref()
            .map(|value| parse_date("order_date", value))
            .transpose()
    }
}

/// Parameters for setting or clearing the desired delivery date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EventDate {
    /// Desired delivery date in `YYYY-MM-DD` format; omit to clear it
    pub event_date: Option<String>,
}

impl EventDate {
    /// Parse the date string, if present.
    pub fn validate(&self) -> crate::Result<Option<Date>> {
        self.event_date
            .as_deref()
            .map(|value| parse_date("event_date", value))
            .transpose()
    }
}

/// Parameters for applying a scenario or toggling the selection off.
///
/// The id is checked against the live scenario list at the interface layer,
/// where an unknown id is an explicit error instead of the core's silent
/// no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectScenario {
    /// Scenario id to apply (e.g. `photo-1-physical-normal`); omit to
    /// deselect
    pub scenario_id: Option<String>,
}

/// Parameters for choosing the initial sample confirmation method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SampleMethod {
    /// Confirmation method: 'photo' or 'physical'
    pub method: String,
}

impl SampleMethod {
    /// Parse the method token.
    pub fn validate(&self) -> crate::Result<ConfirmationMethod> {
        parse_method("method", &self.method)
    }
}

/// Parameters for choosing the production speed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Speed {
    /// Production speed: 'normal' or 'express'
    pub speed: String,
}

impl Speed {
    /// Parse the speed token.
    pub fn validate(&self) -> crate::Result<ProductionSpeed> {
        parse_speed("speed", &self.speed)
    }
}

/// Parameters for operations addressing one revision round by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RevisionId {
    /// Id of the revision round to operate on
    pub revision_id: u64,
}

/// Parameters for changing the confirmation method of one revision round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RevisionMethod {
    /// Id of the revision round to change
    pub revision_id: u64,
    /// Confirmation method: 'photo' or 'physical'
    pub method: String,
}

impl RevisionMethod {
    /// Parse the method token.
    pub fn validate(&self) -> crate::Result<ConfirmationMethod> {
        parse_method("method", &self.method)
    }
}

/// Parameters for listing scenarios.
///
/// Without an order date the listing is empty; the optional speed narrows
/// the list to one production speed group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScenarioQuery {
    /// Order date in `YYYY-MM-DD` format; omit to list against the
    /// session's current date
    pub order_date: Option<String>,
    /// Restrict the listing to one speed: 'normal' or 'express'
    pub speed: Option<String>,
}

impl ScenarioQuery {
    /// Parse the date and speed filter.
    pub fn validate(&self) -> crate::Result<(Option<Date>, Option<ProductionSpeed>)> {
        let order_date = self
            .order_date
            .as_deref()
            .map(|value| parse_date("order_date", value))
            .transpose()?;
        let speed = self
            .speed
            .as_deref()
            .map(|value| parse_speed("speed", value))
            .transpose()?;
        Ok((order_date, speed))
    }
}

/// One-shot schedule description for non-interactive quoting.
///
/// Either names a scenario id or spells out the stage choices by hand; the
/// two forms are mutually exclusive. Manual choices that are omitted fall
/// back to the schedule defaults (photo sample, no revisions, normal
/// production).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScheduleSpec {
    /// Production start date in `YYYY-MM-DD` format (required)
    pub order_date: String,
    /// Desired delivery date in `YYYY-MM-DD` format
    pub event_date: Option<String>,
    /// Scenario id to apply (e.g. `photo-1-physical-normal`)
    pub scenario_id: Option<String>,
    /// Initial sample confirmation method: 'photo' or 'physical'
    pub initial_sample: Option<String>,
    /// Confirmation method of each revision round, in order (at most 2)
    #[serde(default)]
    pub revisions: Vec<String>,
    /// Production speed: 'normal' or 'express'
    pub production_speed: Option<String>,
}

/// Parsed form of [`ScheduleSpec`] with dates and tokens resolved.
#[derive(Debug, Clone)]
pub struct ValidScheduleSpec {
    pub order_date: Date,
    pub event_date: Option<Date>,
    pub scenario_id: Option<String>,
    pub initial_sample: Option<ConfirmationMethod>,
    pub revisions: Vec<ConfirmationMethod>,
    pub production_speed: Option<ProductionSpeed>,
}

impl ValidScheduleSpec {
    /// True when any stage was spelled out by hand.
    pub fn has_stage_choices(&self) -> bool {
        self.initial_sample.is_some()
            || !self.revisions.is_empty()
            || self.production_speed.is_some()
    }
}

impl ScheduleSpec {
    /// Validate and parse every field of the spec.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::InvalidInput` - When a date or token fails to
    ///   parse, when more than [`Schedule::MAX_REVISIONS`] revisions are
    ///   given, or when a scenario id is combined with manual choices
    pub fn validate(&self) -> crate::Result<ValidScheduleSpec> {
        let order_date = parse_date("order_date", &self.order_date)?;
        let event_date = self
            .event_date
            .as_deref()
            .map(|value| parse_date("event_date", value))
            .transpose()?;

        let has_manual_choices = self.initial_sample.is_some()
            || !self.revisions.is_empty()
            || self.production_speed.is_some();
        if self.scenario_id.is_some() && has_manual_choices {
            return Err(ScheduleError::invalid_input("scenario_id")
                .with_reason("A scenario id cannot be combined with manual stage choices"));
        }

        if self.revisions.len() > Schedule::MAX_REVISIONS {
            return Err(ScheduleError::invalid_input("revisions").with_reason(format!(
                "At most {} revision rounds are allowed, got {}",
                Schedule::MAX_REVISIONS,
                self.revisions.len()
            )));
        }

        let initial_sample = self
            .initial_sample
            .as_deref()
            .map(|value| parse_method("initial_sample", value))
            .transpose()?;
        let revisions = self
            .revisions
            .iter()
            .map(|value| parse_method("revisions", value))
            .collect::<crate::Result<Vec<_>>>()?;
        let production_speed = self
            .production_speed
            .as_deref()
            .map(|value| parse_speed("production_speed", value))
            .transpose()?;

        Ok(ValidScheduleSpec {
            order_date,
            event_date,
            scenario_id: self.scenario_id.clone(),
            initial_sample,
            revisions,
            production_speed,
        })
    }
}
