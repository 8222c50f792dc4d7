//! Pure state transitions over schedules.

use crate::models::{ConfirmationMethod, ProductionSpeed, Revision, Scenario, Schedule};

use super::Action;

/// Apply one action to a schedule, producing the next schedule.
///
/// Total and side-effect free. The scenario list is passed in so that
/// applying a selection copies choice fields from the enumerated scenario
/// without re-deriving it here.
///
/// Selection bookkeeping follows a small state machine over
/// `(selected_scenario_id, manually_modified)`: applying a scenario
/// overwrites all choice fields and revisions atomically and clears the
/// manual flag; directly editing any stage clears the selection and sets
/// the flag; deselecting keeps the current field values and sets the flag.
/// Clearing the order date resets the planning fields entirely (the event
/// date and the revision id counter survive).
pub fn apply(schedule: &Schedule, scenarios: &[Scenario], action: Action) -> Schedule {
    let mut next = schedule.clone();
    match action {
        Action::SetOrderDate(date) => {
            next.order_date = date;
            if date.is_none() {
                next.initial_sample_method = ConfirmationMethod::default();
                next.production_speed = ProductionSpeed::default();
                next.revisions.clear();
                next.selected_scenario_id = None;
                next.manually_modified = false;
            }
        }
        Action::SetEventDate(date) => {
            next.event_date = date;
        }
        Action::SetInitialSampleMethod(method) => {
            if next.initial_sample_method != method {
                next.initial_sample_method = method;
                mark_manual(&mut next);
            }
        }
        Action::SetProductionSpeed(speed) => {
            if next.production_speed != speed {
                next.production_speed = speed;
                mark_manual(&mut next);
            }
        }
        Action::AddRevision => {
            if next.revisions.len() < Schedule::MAX_REVISIONS {
                let id = next.next_revision_id;
                next.next_revision_id += 1;
                next.revisions
                    .push(Revision::new(id, ConfirmationMethod::default()));
                mark_manual(&mut next);
            }
        }
        Action::RemoveRevision(id) => {
            if let Some(position) = next.revisions.iter().position(|r| r.id == id) {
                next.revisions.remove(position);
                mark_manual(&mut next);
            }
        }
        Action::SetRevisionMethod { id, method } => {
            if let Some(revision) = next.revisions.iter_mut().find(|r| r.id == id) {
                if revision.method != method {
                    revision.method = method;
                    mark_manual(&mut next);
                }
            }
        }
        Action::SelectScenario(Some(id)) => {
            // Reselecting the applied scenario keeps the existing revision
            // ids; rebuilding them would invalidate references held by the
            // interface layer.
            if next.selected_scenario_id.as_deref() != Some(id.as_str()) {
                if let Some(scenario) = scenarios.iter().find(|s| s.id == id) {
                    next.initial_sample_method = scenario.initial_sample_method;
                    next.production_speed = scenario.production_speed;
                    let mut revisions = Vec::with_capacity(scenario.revision_methods.len());
                    for method in &scenario.revision_methods {
                        revisions.push(Revision::new(next.next_revision_id, *method));
                        next.next_revision_id += 1;
                    }
                    next.revisions = revisions;
                    next.selected_scenario_id = Some(scenario.id.clone());
                    next.manually_modified = false;
                }
            }
        }
        Action::SelectScenario(None) => {
            if next.selected_scenario_id.take().is_some() {
                next.manually_modified = true;
            }
        }
    }
    next
}

fn mark_manual(schedule: &mut Schedule) {
    schedule.selected_scenario_id = None;
    schedule.manually_modified = true;
}
