//! Command handlers for the terminal interface
//!
//! Each handler validates its interface params into domain types, drives a
//! short-lived [`Session`], and renders the resulting markdown through the
//! terminal renderer. Sessions here live for a single invocation; the
//! long-lived interactive counterpart is the MCP server in [`crate::mcp`].

use anyhow::Result;
use log::debug;
use stitch_core::{
    params::{ScenarioQuery, ScheduleSpec, ValidScheduleSpec},
    ScenarioList, ScheduleError, Session,
};

use crate::renderer::TerminalRenderer;

/// Command handler owning the output renderer
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Enumerate and render delivery scenarios for the queried order date.
    ///
    /// Without an order date the session enumerates nothing and the list
    /// renders its empty-state hint instead.
    pub fn handle_scenarios(&self, query: &ScenarioQuery) -> Result<()> {
        debug!("scenarios: {query:?}");
        let (order_date, speed) = query.validate()?;

        let mut session = Session::new();
        session.set_order_date(order_date);

        let list = ScenarioList::new(
            session.scenarios().to_vec(),
            session.policy().recommended_id(),
            session.schedule().selected_scenario_id.clone(),
        )
        .with_speed(speed);

        self.renderer.render(&list.to_string());
        Ok(())
    }

    /// Build the schedule described by a one-shot spec and render it.
    ///
    /// An unknown scenario id is a hard error here, unlike the silent
    /// in-session no-op: a typo on the command line should not quietly
    /// schedule the recommendation instead.
    pub fn handle_schedule(&self, spec: &ScheduleSpec) -> Result<()> {
        debug!("schedule: {spec:?}");
        let spec = spec.validate()?;

        let mut session = Session::new();
        session.set_order_date(Some(spec.order_date));
        session.set_event_date(spec.event_date);

        if let Some(id) = &spec.scenario_id {
            if session.find_scenario(id).is_none() {
                return Err(ScheduleError::scenario_not_found(id).into());
            }
            session.select_scenario(Some(id.clone()));
        } else if spec.has_stage_choices() {
            apply_manual_stages(&mut session, &spec);
        }

        self.renderer.render(&session.schedule().to_string());
        Ok(())
    }
}

/// Replace the auto-selected stage mix with exactly the requested one.
///
/// Missing pieces fall back to the schedule defaults (photo sample, normal
/// production, no revisions), so the given flags fully describe the
/// composition rather than patching the recommendation.
fn apply_manual_stages(session: &mut Session, spec: &ValidScheduleSpec) {
    session.set_initial_sample_method(spec.initial_sample.unwrap_or_default());
    session.set_production_speed(spec.production_speed.unwrap_or_default());

    let current: Vec<u64> = session.schedule().revisions.iter().map(|r| r.id).collect();
    for id in current {
        session.remove_revision(id);
    }
    for method in &spec.revisions {
        session.add_revision();
        let added = session.schedule().revisions.last().map(|r| r.id);
        if let Some(id) = added {
            session.set_revision_method(id, *method);
        }
    }
}

#[cfg(test)]
mod tests {
    use stitch_core::{ConfirmationMethod, ProductionSpeed};

    use super::*;

    fn validated(spec: &ScheduleSpec) -> ValidScheduleSpec {
        spec.validate().expect("spec should validate")
    }

    #[test]
    fn manual_stages_replace_the_recommendation() {
        let spec = ScheduleSpec {
            order_date: "2025-01-06".to_string(),
            initial_sample: Some("physical".to_string()),
            revisions: vec!["photo".to_string(), "photo".to_string()],
            production_speed: Some("express".to_string()),
            ..Default::default()
        };
        let spec = validated(&spec);

        let mut session = Session::new();
        session.set_order_date(Some(spec.order_date));
        apply_manual_stages(&mut session, &spec);

        let schedule = session.schedule();
        assert_eq!(
            schedule.initial_sample_method,
            ConfirmationMethod::Physical
        );
        assert_eq!(schedule.production_speed, ProductionSpeed::Express);
        assert_eq!(
            schedule.revision_methods(),
            vec![ConfirmationMethod::Photo, ConfirmationMethod::Photo]
        );
        assert!(schedule.selected_scenario_id.is_none());
        assert!(schedule.manually_modified);
    }

    #[test]
    fn omitted_manual_flags_fall_back_to_defaults() {
        let spec = ScheduleSpec {
            order_date: "2025-01-06".to_string(),
            initial_sample: Some("physical".to_string()),
            ..Default::default()
        };
        let spec = validated(&spec);

        let mut session = Session::new();
        session.set_order_date(Some(spec.order_date));
        apply_manual_stages(&mut session, &spec);

        let schedule = session.schedule();
        assert_eq!(
            schedule.initial_sample_method,
            ConfirmationMethod::Physical
        );
        assert_eq!(schedule.production_speed, ProductionSpeed::Normal);
        assert!(schedule.revisions.is_empty());
    }
}
