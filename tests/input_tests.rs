use std::io::Write;

use chrono::NaiveDate;
use gantt_tool::{
    InputError, PlanEntry, ProjectMetadata, ProjectPlan, Schedule, load_plan_from_csv,
    load_plan_from_json,
};
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn json_plan_loads_metadata_holidays_and_tasks() {
    let file = write_temp(
        r#"{
            "project_name": "Permit Application",
            "start_date": "2025-01-06",
            "holidays": ["2025-01-08"],
            "tasks": [
                {"name": "Survey", "working_days": 2},
                {"name": "Draft", "working_days": null},
                {"name": "Submit", "working_days": 1}
            ]
        }"#,
    );

    let plan = load_plan_from_json(file.path()).unwrap();
    assert_eq!(plan.metadata.project_name, "Permit Application");
    assert_eq!(plan.metadata.project_start_date, d(2025, 1, 6));
    assert_eq!(plan.holidays, vec![d(2025, 1, 8)]);
    assert_eq!(plan.tasks.len(), 3);

    // The blank entry is excluded before scheduling
    let requests = plan.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].name, "Survey");
    assert_eq!(requests[1].name, "Submit");

    let calendar = plan.calendar();
    assert!(!calendar.is_working_day(d(2025, 1, 8)));
}

#[test]
fn json_plan_requires_a_start_date() {
    let file = write_temp(
        r#"{"project_name": "P", "start_date": "", "tasks": [{"name": "A", "working_days": 1}]}"#,
    );

    match load_plan_from_json(file.path()) {
        Err(InputError::InvalidData(msg)) => assert!(msg.contains("start date")),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn json_plan_rejects_an_unparsable_date() {
    let file = write_temp(
        r#"{"project_name": "P", "start_date": "06/01/2025", "tasks": [{"name": "A", "working_days": 1}]}"#,
    );

    match load_plan_from_json(file.path()) {
        Err(InputError::InvalidData(msg)) => assert!(msg.contains("invalid date")),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn csv_plan_loads_entries_and_keeps_blanks_excluded() {
    let file = write_temp("name,working_days\nSurvey,2\nDraft,\nSubmit,1\n");

    let plan = load_plan_from_csv(file.path()).unwrap();
    assert_eq!(plan.tasks.len(), 3);
    assert_eq!(plan.tasks[1], PlanEntry::new("Draft", None));
    assert_eq!(plan.requests().len(), 2);
}

#[test]
fn csv_plan_rejects_non_integer_durations() {
    let file = write_temp("name,working_days\nSurvey,two\n");

    match load_plan_from_csv(file.path()) {
        Err(InputError::InvalidData(msg)) => assert!(msg.contains("invalid integer")),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn csv_plan_rejects_an_empty_file() {
    let file = write_temp("name,working_days\n");

    match load_plan_from_csv(file.path()) {
        Err(InputError::InvalidData(msg)) => assert!(msg.contains("no tasks")),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn validate_rejects_negative_working_days() {
    let mut plan = ProjectPlan::new(ProjectMetadata::default());
    plan.tasks.push(PlanEntry::new("Survey", Some(-3)));

    match plan.validate() {
        Err(InputError::InvalidData(msg)) => assert!(msg.contains("negative")),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn validate_rejects_a_plan_with_no_durations_at_all() {
    let mut plan = ProjectPlan::new(ProjectMetadata::default());
    plan.tasks.push(PlanEntry::new("Survey", None));
    plan.tasks.push(PlanEntry::new("Draft", None));

    match plan.validate() {
        Err(InputError::InvalidData(msg)) => {
            assert_eq!(msg, "no task durations provided");
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn excluded_interior_entry_chains_its_neighbours_together() {
    let mut plan = ProjectPlan::new(ProjectMetadata {
        project_name: "P".to_string(),
        project_start_date: d(2025, 1, 6),
    });
    plan.tasks.push(PlanEntry::new("First", Some(2)));
    plan.tasks.push(PlanEntry::new("Skipped", None));
    plan.tasks.push(PlanEntry::new("Third", Some(1)));

    plan.validate().unwrap();
    let calendar = plan.calendar();
    let schedule = Schedule::build(plan.metadata.clone(), &plan.requests(), &calendar).unwrap();

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule.tasks()[0].name, "First");
    assert_eq!(schedule.tasks()[1].name, "Third");
    // The skipped entry is not a gap: Third starts on First's end.
    assert_eq!(schedule.tasks()[1].start, schedule.tasks()[0].end);
}
