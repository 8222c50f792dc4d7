//! Exhaustive scenario enumeration and ranking.

use jiff::civil::Date;

use crate::models::{ConfirmationMethod, ProductionSpeed, Scenario};
use crate::policy::RecommendationPolicy;

const METHODS: [ConfirmationMethod; 2] = [ConfirmationMethod::Photo, ConfirmationMethod::Physical];
const SPEEDS: [ProductionSpeed; 2] = [ProductionSpeed::Normal, ProductionSpeed::Express];

/// Maximum number of revision rounds a scenario may include.
///
/// Matches [`Schedule::MAX_REVISIONS`](crate::models::Schedule::MAX_REVISIONS);
/// the enumeration space is 2 samples x (1 + 2 + 4) revision sequences x
/// 2 speeds = 28 scenarios.
const MAX_REVISION_ROUNDS: usize = 2;

/// Enumerate every feasible scenario for an order date, ranked for display.
///
/// Without an order date there is nothing to schedule and the list is empty;
/// the caller signals "no scenarios" from emptiness rather than an error.
///
/// The result is sorted ascending by total weeks, except the policy's
/// recommended scenario is always forced to the front when present. The sort
/// is stable, so scenarios of equal length keep their generation order and
/// every non-recommended entry stays ascending relative to the others.
pub fn enumerate_scenarios(order_date: Option<Date>, policy: &RecommendationPolicy) -> Vec<Scenario> {
    let Some(start) = order_date else {
        return Vec::new();
    };

    let mut scenarios = Vec::with_capacity(28);
    for sample in METHODS {
        for count in 0..=MAX_REVISION_ROUNDS {
            for revisions in revision_sequences(count) {
                for speed in SPEEDS {
                    scenarios.push(Scenario::new(start, sample, revisions.clone(), speed));
                }
            }
        }
    }

    let recommended = policy.recommended_id();
    scenarios.sort_by_key(|s| (s.id != recommended, s.total_weeks));
    scenarios
}

/// Every ordered method sequence of the given length (2^len sequences).
///
/// Length 0 yields exactly the empty sequence. Order matters: `[photo,
/// physical]` and `[physical, photo]` are distinct scenarios even though
/// their totals agree.
fn revision_sequences(len: usize) -> Vec<Vec<ConfirmationMethod>> {
    let mut sequences = vec![Vec::new()];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|seq| {
                METHODS.iter().map(move |method| {
                    let mut next = seq.clone();
                    next.push(*method);
                    next
                })
            })
            .collect();
    }
    sequences
}
