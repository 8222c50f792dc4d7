#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::civil::date;
    use jiff::{Span, ToSpan};

    use crate::models::{
        ConfirmationMethod, ProductionSpeed, Revision, Scenario, Schedule, StageKind, Timeline,
    };

    fn create_test_scenario() -> Scenario {
        Scenario::new(
            date(2025, 1, 6),
            ConfirmationMethod::Photo,
            vec![ConfirmationMethod::Physical],
            ProductionSpeed::Normal,
        )
    }

    fn create_test_schedule() -> Schedule {
        Schedule {
            order_date: Some(date(2025, 1, 6)),
            event_date: Some(date(2025, 3, 1)),
            initial_sample_method: ConfirmationMethod::Photo,
            revisions: vec![Revision {
                id: 1,
                method: ConfirmationMethod::Physical,
            }],
            production_speed: ProductionSpeed::Normal,
            selected_scenario_id: Some("photo-1-physical-normal".to_string()),
            manually_modified: false,
            next_revision_id: 2,
        }
    }

    #[test]
    fn test_confirmation_method_tokens() {
        assert_eq!(ConfirmationMethod::Photo.as_str(), "photo");
        assert_eq!(ConfirmationMethod::Physical.as_str(), "physical");
        assert_eq!(format!("{}", ConfirmationMethod::Photo), "photo");

        assert_eq!(
            ConfirmationMethod::from_str("photo").unwrap(),
            ConfirmationMethod::Photo
        );
        assert_eq!(
            ConfirmationMethod::from_str("PHYSICAL").unwrap(),
            ConfirmationMethod::Physical
        );
        assert!(ConfirmationMethod::from_str("video").is_err());
    }

    #[test]
    fn test_production_speed_tokens() {
        assert_eq!(ProductionSpeed::Normal.as_str(), "normal");
        assert_eq!(ProductionSpeed::Express.as_str(), "express");
        assert_eq!(format!("{}", ProductionSpeed::Express), "express");

        assert_eq!(
            ProductionSpeed::from_str("normal").unwrap(),
            ProductionSpeed::Normal
        );
        assert_eq!(
            ProductionSpeed::from_str("Express").unwrap(),
            ProductionSpeed::Express
        );
        assert!(ProductionSpeed::from_str("fast").is_err());
    }

    #[test]
    fn test_stage_kind_labels() {
        assert_eq!(StageKind::InitialSample.label(), "Initial sample");
        assert_eq!(StageKind::Revision.label(), "Revision");
        assert_eq!(format!("{}", StageKind::Production), "Production");
    }

    #[test]
    fn test_scenario_identity_strings() {
        assert_eq!(
            Scenario::identity(
                ConfirmationMethod::Photo,
                &[ConfirmationMethod::Physical],
                ProductionSpeed::Normal
            ),
            "photo-1-physical-normal"
        );
        assert_eq!(
            Scenario::identity(ConfirmationMethod::Photo, &[], ProductionSpeed::Express),
            "photo-0-express"
        );
        assert_eq!(
            Scenario::identity(
                ConfirmationMethod::Physical,
                &[ConfirmationMethod::Photo, ConfirmationMethod::Physical],
                ProductionSpeed::Normal
            ),
            "physical-2-photo-physical-normal"
        );
    }

    #[test]
    fn test_scenario_display() {
        let scenario = create_test_scenario();
        let output = format!("{}", scenario);

        // Headline carries the id and total
        assert!(output.contains("### photo-1-physical-normal (9 weeks)"));

        // Stage bullets with their individual durations
        assert!(output.contains("- Initial sample: photo confirmation (2 weeks)"));
        assert!(output.contains("- Revision 1: physical sample (2 weeks)"));
        assert!(output.contains("- Production: normal (5 weeks)"));
        assert!(output.contains("- Completion: Mon 2025-03-10"));

        // Markers only appear in list context
        assert!(!output.contains("recommended"));
        assert!(!output.contains("selected"));
    }

    #[test]
    fn test_schedule_display_with_selection() {
        let schedule = create_test_schedule();
        let output = format!("{}", schedule);

        assert!(output.contains("# Delivery Schedule"));
        assert!(output.contains("- Order date: Mon 2025-01-06"));
        assert!(output.contains("- Event date: Sat 2025-03-01"));
        assert!(output.contains("- Scenario: photo-1-physical-normal"));

        // Projected stage-by-stage timeline with offsets and start dates
        assert!(output.contains("## Timeline"));
        assert!(output
            .contains("1. Initial sample (photo confirmation): weeks 0-2, starts Mon 2025-01-06"));
        assert!(output.contains("2. Revision 1 (physical sample): weeks 2-4, starts Mon 2025-01-20"));
        assert!(output.contains("3. Production (normal): weeks 4-9, starts Mon 2025-02-03"));
        assert!(output.contains("- Total: 9 weeks"));
        assert!(output.contains("- Completion: Mon 2025-03-10"));
    }

    #[test]
    fn test_schedule_display_risk_line() {
        let mut schedule = create_test_schedule();
        let output = format!("{}", schedule);
        assert!(output.contains("⚠ At risk: the event date Sat 2025-03-01"));

        schedule.event_date = Some(date(2025, 3, 15));
        let output = format!("{}", schedule);
        assert!(output.contains("✓ On track for the event date Sat 2025-03-15"));

        schedule.event_date = None;
        let output = format!("{}", schedule);
        assert!(!output.contains("At risk"));
        assert!(!output.contains("On track"));
    }

    #[test]
    fn test_schedule_display_manual_configuration() {
        let mut schedule = create_test_schedule();
        schedule.selected_scenario_id = None;
        schedule.manually_modified = true;

        let output = format!("{}", schedule);
        assert!(output.contains("- Scenario: none (manually configured)"));
    }

    #[test]
    fn test_schedule_display_without_order_date() {
        let schedule = Schedule::new();
        let output = format!("{}", schedule);

        assert!(output.contains("- Order date: not set"));
        assert!(output.contains("- Event date: not set"));
        assert!(output.contains("- Scenario: none"));
        assert!(output.contains("Set an order date to project the timeline."));
        assert!(!output.contains("## Timeline"));
    }

    #[test]
    fn test_timeline_empty_without_order_date() {
        let timeline = Timeline::project(&Schedule::new());

        assert!(timeline.stages.is_empty());
        assert_eq!(timeline.total_weeks, 0);
        assert_eq!(timeline.end_date, None);
        assert!(!timeline.at_risk);
    }

    #[test]
    fn test_timeline_offsets_are_running_sums() {
        let mut schedule = create_test_schedule();
        schedule.revisions.push(Revision {
            id: 2,
            method: ConfirmationMethod::Photo,
        });
        schedule.selected_scenario_id = None;

        let timeline = Timeline::project(&schedule);
        assert_eq!(timeline.stages.len(), 4);

        let start = date(2025, 1, 6);
        let mut offset = 0u32;
        for stage in &timeline.stages {
            assert_eq!(stage.offset_weeks, offset);
            let expected: Span = (i64::from(offset) * 7).days();
            assert_eq!(stage.starts_on, start.saturating_add(expected));
            offset += stage.weeks;
        }
        assert_eq!(timeline.total_weeks, offset);
        assert_eq!(timeline.total_weeks, 2 + 2 + 1 + 5);
    }

    #[test]
    fn test_timeline_risk_boundary() {
        let mut schedule = create_test_schedule();

        // Event date equal to completion is not at risk
        schedule.event_date = Some(date(2025, 3, 10));
        assert!(!Timeline::project(&schedule).at_risk);

        schedule.event_date = Some(date(2025, 3, 9));
        assert!(Timeline::project(&schedule).at_risk);

        schedule.event_date = None;
        assert!(!Timeline::project(&schedule).at_risk);
    }

    #[test]
    fn test_timeline_revision_stage_ids() {
        let mut schedule = create_test_schedule();
        schedule.revisions = vec![
            Revision {
                id: 3,
                method: ConfirmationMethod::Photo,
            },
            Revision {
                id: 5,
                method: ConfirmationMethod::Physical,
            },
        ];
        schedule.selected_scenario_id = None;

        let timeline = Timeline::project(&schedule);
        let revision_ids: Vec<_> = timeline
            .stages
            .iter()
            .filter(|s| s.kind == StageKind::Revision)
            .map(|s| s.revision_id)
            .collect();
        assert_eq!(revision_ids, vec![Some(3), Some(5)]);

        let output = format!("{}", schedule);
        assert!(output.contains("Revision 3 (photo confirmation)"));
        assert!(output.contains("Revision 5 (physical sample)"));
    }

    #[test]
    fn test_schedule_revision_lookups() {
        let schedule = create_test_schedule();

        assert_eq!(
            schedule.revision_methods(),
            vec![ConfirmationMethod::Physical]
        );
        assert_eq!(
            schedule.revision(1).map(|r| r.method),
            Some(ConfirmationMethod::Physical)
        );
        assert!(schedule.revision(9).is_none());
    }

    #[test]
    fn test_scenario_json_shape() {
        let scenario = create_test_scenario();
        let json = serde_json::to_value(&scenario).unwrap();

        assert_eq!(json["id"], "photo-1-physical-normal");
        assert_eq!(json["initial_sample_method"], "photo");
        assert_eq!(json["revision_methods"][0], "physical");
        assert_eq!(json["production_speed"], "normal");
        assert_eq!(json["total_weeks"], 9);
        assert_eq!(json["end_date"], "2025-03-10");
    }

    #[test]
    fn test_schedule_json_round_trip() {
        let schedule = create_test_schedule();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();

        assert_eq!(back, schedule);
    }
}
