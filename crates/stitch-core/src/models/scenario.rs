//! Scenario model definition and identity rules.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ConfirmationMethod, ProductionSpeed};
use crate::durations;

/// One fully-specified candidate production plan.
///
/// A scenario is derived entirely from its three independent choices plus an
/// order date. It is immutable after construction: regeneration replaces the
/// whole list rather than mutating entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Deterministic identity key derived from the choices
    pub id: String,

    /// How the initial sample is confirmed
    pub initial_sample_method: ConfirmationMethod,

    /// Confirmation method of each revision round, in execution order
    pub revision_methods: Vec<ConfirmationMethod>,

    /// Production run speed
    pub production_speed: ProductionSpeed,

    /// Total pipeline duration in weeks
    pub total_weeks: u32,

    /// Calendar completion date for the given order date
    pub end_date: Date,
}

impl Scenario {
    /// Build a scenario for an order date from a full set of choices.
    pub fn new(
        order_date: Date,
        initial_sample_method: ConfirmationMethod,
        revision_methods: Vec<ConfirmationMethod>,
        production_speed: ProductionSpeed,
    ) -> Self {
        let total_weeks =
            durations::total_weeks(initial_sample_method, &revision_methods, production_speed);
        Self {
            id: Self::identity(initial_sample_method, &revision_methods, production_speed),
            initial_sample_method,
            revision_methods,
            production_speed,
            total_weeks,
            end_date: durations::end_date(order_date, total_weeks),
        }
    }

    /// Deterministic tuple-string identity for a set of choices.
    ///
    /// Tokens are the sample method, the revision count, each revision
    /// method in order, and the speed, joined with `-`. The id is
    /// independent of the order date, so it stays stable across
    /// regenerations: `photo-1-physical-normal`, `photo-0-express`,
    /// `physical-2-photo-physical-normal`.
    pub fn identity(
        sample: ConfirmationMethod,
        revisions: &[ConfirmationMethod],
        speed: ProductionSpeed,
    ) -> String {
        let mut tokens = Vec::with_capacity(revisions.len() + 3);
        tokens.push(sample.as_str());
        let count = revisions.len().to_string();
        tokens.push(&count);
        for method in revisions {
            tokens.push(method.as_str());
        }
        tokens.push(speed.as_str());
        tokens.join("-")
    }
}
