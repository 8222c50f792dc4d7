//! Timeline projection of a schedule.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ConfirmationMethod, ProductionSpeed, Schedule, StageKind};
use crate::durations;

/// One stage of a projected timeline with its calendar annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageSlot {
    /// What kind of stage this is
    pub kind: StageKind,

    /// Confirmation method (sample and revision stages)
    pub method: Option<ConfirmationMethod>,

    /// Production speed (production stage)
    pub speed: Option<ProductionSpeed>,

    /// Id of the backing revision entry (revision stages)
    pub revision_id: Option<u64>,

    /// Duration of this stage in weeks
    pub weeks: u32,

    /// Sum of all prior stage durations in weeks
    pub offset_weeks: u32,

    /// Calendar date this stage begins
    pub starts_on: Date,
}

/// Derived view of a schedule: per-stage breakdown, total, end date, risk.
///
/// Recomputed in full from the schedule on every call; nothing here is
/// cached across mutations. Without an order date the projection is empty
/// with zero totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    /// Stages in execution order with cumulative week offsets
    pub stages: Vec<StageSlot>,

    /// Total pipeline duration in weeks
    pub total_weeks: u32,

    /// Calendar completion date, when an order date is set
    pub end_date: Option<Date>,

    /// True when the desired event date precedes the completion date
    pub at_risk: bool,
}

impl Timeline {
    /// Project the derived timeline from a schedule's current fields.
    pub fn project(schedule: &Schedule) -> Self {
        let Some(start) = schedule.order_date else {
            return Self::default();
        };

        let mut stages = Vec::with_capacity(schedule.revisions.len() + 2);
        let mut offset = 0u32;

        let sample_weeks = durations::initial_sample_weeks(schedule.initial_sample_method);
        stages.push(StageSlot {
            kind: StageKind::InitialSample,
            method: Some(schedule.initial_sample_method),
            speed: None,
            revision_id: None,
            weeks: sample_weeks,
            offset_weeks: offset,
            starts_on: durations::end_date(start, offset),
        });
        offset += sample_weeks;

        for revision in &schedule.revisions {
            let weeks = durations::revision_weeks(revision.method);
            stages.push(StageSlot {
                kind: StageKind::Revision,
                method: Some(revision.method),
                speed: None,
                revision_id: Some(revision.id),
                weeks,
                offset_weeks: offset,
                starts_on: durations::end_date(start, offset),
            });
            offset += weeks;
        }

        let production_weeks = durations::production_weeks(schedule.production_speed);
        stages.push(StageSlot {
            kind: StageKind::Production,
            method: None,
            speed: Some(schedule.production_speed),
            revision_id: None,
            weeks: production_weeks,
            offset_weeks: offset,
            starts_on: durations::end_date(start, offset),
        });
        offset += production_weeks;

        let end = durations::end_date(start, offset);
        let at_risk = schedule.event_date.is_some_and(|event| event < end);

        Self {
            stages,
            total_weeks: offset,
            end_date: Some(end),
            at_risk,
        }
    }
}
