use jiff::civil::date;

use stitch_core::{ConfirmationMethod, ProductionSpeed, ScenarioList, Session, StageKind};

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_quote_workflow() {
    let mut session = Session::new();

    // Nothing to schedule before an order date is set
    assert!(session.scenarios().is_empty());
    assert_eq!(session.timeline().total_weeks, 0);

    // Setting the order date enumerates scenarios and applies the
    // recommendation
    session.set_order_date(Some(date(2025, 1, 6)));
    assert_eq!(session.scenarios().len(), 28);
    assert_eq!(
        session.schedule().selected_scenario_id.as_deref(),
        Some("photo-1-physical-normal")
    );
    assert_eq!(session.timeline().total_weeks, 9);
    assert_eq!(session.timeline().end_date, Some(date(2025, 3, 10)));

    // The display order puts the recommendation first, then ascending totals
    assert_eq!(session.scenarios()[0].id, "photo-1-physical-normal");
    assert_eq!(session.scenarios()[1].id, "photo-0-express");
    assert_eq!(session.scenarios()[1].total_weeks, 4);
    assert_eq!(
        session.scenarios()[27].id,
        "physical-2-physical-physical-normal"
    );
    assert_eq!(session.scenarios()[27].total_weeks, 12);

    // A tight event date puts the 9-week recommendation at risk
    session.set_event_date(Some(date(2025, 3, 1)));
    assert!(session.is_at_risk());

    // Switching to the fastest scenario clears the risk
    session.select_scenario(Some("photo-0-express".to_string()));
    assert_eq!(session.timeline().total_weeks, 4);
    assert_eq!(session.timeline().end_date, Some(date(2025, 2, 3)));
    assert!(!session.is_at_risk());
    assert_eq!(session.selected_scenario_index(), Some(1));

    // Hand-tuning a stage drops back to manual planning
    session.add_revision();
    let schedule = session.schedule();
    assert_eq!(schedule.selected_scenario_id, None);
    assert!(schedule.manually_modified);
    assert_eq!(schedule.revisions.len(), 1);
    assert_eq!(session.timeline().total_weeks, 5);

    let revision_id = session.schedule().revisions[0].id;
    session.set_revision_method(revision_id, ConfirmationMethod::Physical);
    assert_eq!(session.timeline().total_weeks, 6);
    assert_eq!(session.timeline().end_date, Some(date(2025, 2, 17)));
    assert!(!session.is_at_risk());

    // Clearing the order date starts a fresh planning round
    session.set_order_date(None);
    assert!(session.scenarios().is_empty());
    assert!(session.schedule().revisions.is_empty());
    assert!(!session.schedule().manually_modified);
    assert_eq!(session.schedule().event_date, Some(date(2025, 3, 1)));

    // The new round auto-selects the recommendation again
    session.set_order_date(Some(date(2025, 3, 3)));
    assert_eq!(
        session.schedule().selected_scenario_id.as_deref(),
        Some("photo-1-physical-normal")
    );
    assert_eq!(session.timeline().end_date, Some(date(2025, 5, 5)));
    assert!(session.is_at_risk());
}

#[test]
fn test_quote_vectors_for_selected_scenarios() {
    let mut session = Session::new();
    session.set_order_date(Some(date(2025, 1, 6)));

    // (scenario id, total weeks, completion date)
    let vectors = [
        ("photo-0-express", 4, date(2025, 2, 3)),
        ("physical-0-express", 5, date(2025, 2, 10)),
        ("photo-0-normal", 7, date(2025, 2, 24)),
        ("photo-1-physical-normal", 9, date(2025, 3, 10)),
        ("photo-2-photo-physical-normal", 10, date(2025, 3, 17)),
        ("physical-2-physical-physical-normal", 12, date(2025, 3, 31)),
    ];

    for (id, weeks, end) in vectors {
        session.select_scenario(Some(id.to_string()));
        let timeline = session.timeline();
        assert_eq!(timeline.total_weeks, weeks, "scenario {id}");
        assert_eq!(timeline.end_date, Some(end), "scenario {id}");
        assert!(!session.schedule().manually_modified, "scenario {id}");
    }
}

#[test]
fn test_manual_composition_matches_its_scenario_twin() {
    // Compose physical sample + two photo revisions + express by hand
    let mut session = Session::new();
    session.set_order_date(Some(date(2025, 1, 6)));

    session.set_initial_sample_method(ConfirmationMethod::Physical);
    session.set_production_speed(ProductionSpeed::Express);
    let existing: Vec<u64> = session.schedule().revisions.iter().map(|r| r.id).collect();
    for id in existing {
        session.remove_revision(id);
    }
    session.add_revision();
    session.add_revision();

    let schedule = session.schedule();
    assert_eq!(schedule.selected_scenario_id, None);
    assert!(schedule.manually_modified);
    assert_eq!(
        schedule.revision_methods(),
        vec![ConfirmationMethod::Photo, ConfirmationMethod::Photo]
    );

    // physical sample (3) + photo revisions (1 + 1) + express production (2)
    assert_eq!(session.timeline().total_weeks, 7);
    assert_eq!(session.timeline().end_date, Some(date(2025, 2, 24)));

    // The enumerated twin quotes the same duration
    let twin = session
        .find_scenario("physical-2-photo-photo-express")
        .expect("Failed to find the matching scenario");
    assert_eq!(twin.total_weeks, 7);
    assert_eq!(twin.end_date, date(2025, 2, 24));
}

#[test]
fn test_timeline_stage_annotations() {
    let mut session = Session::new();
    session.set_order_date(Some(date(2025, 1, 6)));
    session.select_scenario(Some("physical-2-photo-physical-normal".to_string()));

    let timeline = session.timeline();
    let stages = &timeline.stages;
    assert_eq!(stages.len(), 4);

    // Kinds in execution order
    assert_eq!(stages[0].kind, StageKind::InitialSample);
    assert_eq!(stages[1].kind, StageKind::Revision);
    assert_eq!(stages[2].kind, StageKind::Revision);
    assert_eq!(stages[3].kind, StageKind::Production);

    // physical sample (3), photo revision (1), physical revision (2),
    // normal production (5)
    assert_eq!(stages[0].weeks, 3);
    assert_eq!(stages[1].weeks, 1);
    assert_eq!(stages[2].weeks, 2);
    assert_eq!(stages[3].weeks, 5);

    // Offsets are running sums and each start date follows from its offset
    let mut offset = 0;
    for stage in stages {
        assert_eq!(stage.offset_weeks, offset);
        assert_eq!(
            stage.starts_on,
            date(2025, 1, 6) + jiff::Span::new().days(i64::from(offset) * 7),
            "stage {:?}",
            stage.kind
        );
        offset += stage.weeks;
    }
    assert_eq!(timeline.total_weeks, offset);
    assert_eq!(timeline.end_date, Some(date(2025, 3, 24)));

    // Revision stages carry the ids of their backing entries, in order
    let ids: Vec<u64> = session.schedule().revisions.iter().map(|r| r.id).collect();
    assert_eq!(stages[1].revision_id, Some(ids[0]));
    assert_eq!(stages[2].revision_id, Some(ids[1]));
    assert_eq!(stages[0].revision_id, None);
    assert_eq!(stages[3].revision_id, None);
}

#[test]
fn test_out_of_range_edits_never_corrupt_state() {
    let mut session = Session::new();
    session.set_order_date(Some(date(2025, 1, 6)));
    session.add_revision(); // second revision next to the recommended one

    let before = session.schedule().clone();

    // Adding past the cap
    session.add_revision();
    assert_eq!(*session.schedule(), before);

    // Addressing unknown revision ids
    session.remove_revision(999);
    assert_eq!(*session.schedule(), before);
    session.set_revision_method(999, ConfirmationMethod::Physical);
    assert_eq!(*session.schedule(), before);

    // Selecting an id that is not in the list
    session.select_scenario(Some("photo-9-warp".to_string()));
    assert_eq!(*session.schedule(), before);

    // Re-setting the current order date
    session.set_order_date(Some(date(2025, 1, 6)));
    assert_eq!(*session.schedule(), before);
}

#[test]
fn test_schedule_overview_rendering() {
    let mut session = Session::new();
    session.set_order_date(Some(date(2025, 1, 6)));
    session.set_event_date(Some(date(2025, 3, 1)));

    let overview = session.schedule().to_string();
    assert!(overview.contains("# Delivery Schedule"));
    assert!(overview.contains("- Order date: Mon 2025-01-06"));
    assert!(overview.contains("- Event date: Sat 2025-03-01"));
    assert!(overview.contains("- Scenario: photo-1-physical-normal"));
    assert!(overview.contains("## Timeline"));
    assert!(overview.contains("1. Initial sample (photo confirmation): weeks 0-2, starts Mon 2025-01-06"));
    assert!(overview.contains("2. Revision 1 (physical sample): weeks 2-4, starts Mon 2025-01-20"));
    assert!(overview.contains("3. Production (normal): weeks 4-9, starts Mon 2025-02-03"));
    assert!(overview.contains("- Total: 9 weeks"));
    assert!(overview.contains("- Completion: Mon 2025-03-10"));
    assert!(overview.contains("⚠ At risk: the event date Sat 2025-03-01 falls before completion"));

    // A later event date flips the verdict
    session.set_event_date(Some(date(2025, 3, 15)));
    let overview = session.schedule().to_string();
    assert!(overview.contains("✓ On track for the event date Sat 2025-03-15"));
}

#[test]
fn test_scenario_list_rendering_follows_the_session() {
    let mut session = Session::new();
    session.set_order_date(Some(date(2025, 1, 6)));
    session.select_scenario(Some("photo-0-express".to_string()));

    let list = ScenarioList::new(
        session.scenarios().to_vec(),
        session.policy().recommended_id(),
        session.schedule().selected_scenario_id.clone(),
    );
    let output = list.to_string();

    assert!(output.contains("### 1. photo-1-physical-normal (9 weeks) ★ recommended"));
    assert!(output.contains("### 2. photo-0-express (4 weeks) ✓ selected"));
    assert!(output.contains("## Normal production"));
    assert!(output.contains("## Express production"));
}
