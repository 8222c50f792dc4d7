use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn stitch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("stitch").expect("Failed to find stitch binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_help() {
    stitch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scenarios"))
        .stdout(predicate::str::contains("schedule"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_version() {
    stitch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stitch"));
}

#[test]
fn test_cli_scenarios_lists_all_combinations() {
    stitch_cmd()
        .args(["scenarios", "--order-date", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "### 1. photo-1-physical-normal (9 weeks) ★ recommended",
        ))
        .stdout(predicate::str::contains("## Normal production"))
        .stdout(predicate::str::contains("## Express production"))
        .stdout(predicate::str::contains(
            "### 28. physical-2-physical-physical-normal (12 weeks)",
        ))
        .stdout(predicate::str::contains("### 29.").not());
}

#[test]
fn test_cli_scenarios_without_date_prints_hint() {
    stitch_cmd()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."))
        .stdout(predicate::str::contains(
            "configure the schedule stages manually",
        ));
}

#[test]
fn test_cli_default_invocation_prints_hint() {
    stitch_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios available."));
}

#[test]
fn test_cli_scenarios_speed_filter() {
    stitch_cmd()
        .args(["scenarios", "--order-date", "2025-01-06", "--speed", "express"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Express production"))
        .stdout(predicate::str::contains("### 2. photo-0-express (4 weeks)"))
        .stdout(predicate::str::contains("## Normal production").not());
}

#[test]
fn test_cli_scenarios_rejects_unknown_speed() {
    stitch_cmd()
        .args(["scenarios", "--order-date", "2025-01-06", "--speed", "turbo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_scenarios_alias() {
    stitch_cmd()
        .args(["ls", "--order-date", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("photo-1-physical-normal"));
}

#[test]
fn test_cli_schedule_defaults_to_the_recommendation() {
    stitch_cmd()
        .args(["schedule", "--order-date", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Delivery Schedule"))
        .stdout(predicate::str::contains("- Order date: Mon 2025-01-06"))
        .stdout(predicate::str::contains("- Scenario: photo-1-physical-normal"))
        .stdout(predicate::str::contains(
            "1. Initial sample (photo confirmation): weeks 0-2, starts Mon 2025-01-06",
        ))
        .stdout(predicate::str::contains(
            "2. Revision 1 (physical sample): weeks 2-4, starts Mon 2025-01-20",
        ))
        .stdout(predicate::str::contains(
            "3. Production (normal): weeks 4-9, starts Mon 2025-02-03",
        ))
        .stdout(predicate::str::contains("- Total: 9 weeks"))
        .stdout(predicate::str::contains("- Completion: Mon 2025-03-10"));
}

#[test]
fn test_cli_schedule_flags_at_risk_deliveries() {
    stitch_cmd()
        .args([
            "schedule",
            "--order-date",
            "2025-01-06",
            "--event-date",
            "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠ At risk: the event date Sat 2025-03-01 falls before completion",
        ));
}

#[test]
fn test_cli_schedule_reports_on_track_deliveries() {
    stitch_cmd()
        .args([
            "schedule",
            "--order-date",
            "2025-01-06",
            "--event-date",
            "2025-03-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ On track for the event date Sat 2025-03-15",
        ));
}

#[test]
fn test_cli_schedule_with_scenario_id() {
    stitch_cmd()
        .args([
            "schedule",
            "--order-date",
            "2025-01-06",
            "--scenario",
            "photo-0-express",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Scenario: photo-0-express"))
        .stdout(predicate::str::contains("- Total: 4 weeks"));
}

#[test]
fn test_cli_schedule_manual_composition() {
    stitch_cmd()
        .args([
            "schedule",
            "--order-date",
            "2025-01-06",
            "--initial-sample",
            "physical",
            "--revision",
            "photo",
            "--revision",
            "photo",
            "--production-speed",
            "express",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Scenario: none (manually configured)",
        ))
        .stdout(predicate::str::contains("- Total: 7 weeks"));
}

#[test]
fn test_cli_schedule_unknown_scenario_fails() {
    stitch_cmd()
        .args([
            "schedule",
            "--order-date",
            "2025-01-06",
            "--scenario",
            "photo-9-warp",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("photo-9-warp"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_schedule_invalid_date_fails() {
    stitch_cmd()
        .args(["schedule", "--order-date", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("order_date"));
}

#[test]
fn test_cli_schedule_scenario_conflicts_with_manual_flags() {
    stitch_cmd()
        .args([
            "schedule",
            "--order-date",
            "2025-01-06",
            "--scenario",
            "photo-0-express",
            "--production-speed",
            "normal",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
