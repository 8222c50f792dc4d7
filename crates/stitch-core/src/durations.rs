//! Fixed stage durations and calendar arithmetic.
//!
//! Every duration is a pure function of the stage kind plus its
//! method/speed choice. The table is fixed at compile time and is the single
//! place these numbers live; scenarios and timelines never store a duration
//! that could drift from it.
//!
//! | Stage         | Choice   | Weeks |
//! |---------------|----------|-------|
//! | InitialSample | photo    | 2     |
//! | InitialSample | physical | 3     |
//! | Revision      | photo    | 1     |
//! | Revision      | physical | 2     |
//! | Production    | normal   | 5     |
//! | Production    | express  | 2     |

use jiff::civil::Date;
use jiff::Span;

use crate::models::{ConfirmationMethod, ProductionSpeed};

/// Duration of the initial sample stage in weeks.
pub const fn initial_sample_weeks(method: ConfirmationMethod) -> u32 {
    match method {
        ConfirmationMethod::Photo => 2,
        ConfirmationMethod::Physical => 3,
    }
}

/// Duration of one revision round in weeks.
pub const fn revision_weeks(method: ConfirmationMethod) -> u32 {
    match method {
        ConfirmationMethod::Photo => 1,
        ConfirmationMethod::Physical => 2,
    }
}

/// Duration of the production stage in weeks.
pub const fn production_weeks(speed: ProductionSpeed) -> u32 {
    match speed {
        ProductionSpeed::Normal => 5,
        ProductionSpeed::Express => 2,
    }
}

/// Total pipeline duration in weeks for a full set of stage choices.
///
/// Revisions contribute position-independently; only the per-stage calendar
/// annotation cares about ordering.
pub fn total_weeks(
    sample: ConfirmationMethod,
    revisions: &[ConfirmationMethod],
    speed: ProductionSpeed,
) -> u32 {
    initial_sample_weeks(sample)
        + revisions.iter().map(|m| revision_weeks(*m)).sum::<u32>()
        + production_weeks(speed)
}

/// Calendar end date for a pipeline starting on `start` and lasting `weeks`.
///
/// Plain calendar arithmetic, date-only: `start + weeks * 7 days`. No
/// business-day or holiday awareness.
pub fn end_date(start: Date, weeks: u32) -> Date {
    start.saturating_add(Span::new().days(i64::from(weeks) * 7))
}
