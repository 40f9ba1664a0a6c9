use chrono::NaiveDate;
use gantt_tool::{ProjectMetadata, Schedule, TaskRequest, WorkCalendar};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn metadata(start: NaiveDate) -> ProjectMetadata {
    ProjectMetadata {
        project_name: "Permit Application".to_string(),
        project_start_date: start,
    }
}

#[test]
fn build_resolves_dates_with_a_midweek_holiday() {
    // Monday start, Wednesday holiday, four working days required:
    // five calendar days elapse and the end lands on Saturday.
    let calendar = WorkCalendar::with_holidays([d(2025, 1, 8)]);
    let requests = vec![TaskRequest::new("Draft", 4)];

    let schedule = Schedule::build(metadata(d(2025, 1, 6)), &requests, &calendar).unwrap();

    assert_eq!(schedule.tasks()[0].start, d(2025, 1, 6));
    assert_eq!(schedule.tasks()[0].end, d(2025, 1, 11));
    assert_eq!(schedule.tasks()[0].calendar_days(), 5);
}

#[test]
fn build_preserves_input_order() {
    let calendar = WorkCalendar::default();
    let requests = vec![
        TaskRequest::new("Survey", 1),
        TaskRequest::new("Draft", 2),
        TaskRequest::new("Submit", 1),
    ];

    let schedule = Schedule::build(metadata(d(2025, 1, 6)), &requests, &calendar).unwrap();

    let names: Vec<&str> = schedule.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Survey", "Draft", "Submit"]);
}

#[test]
fn span_covers_first_start_to_last_end() {
    let calendar = WorkCalendar::default();
    let requests = vec![TaskRequest::new("A", 2), TaskRequest::new("B", 3)];

    let schedule = Schedule::build(metadata(d(2025, 1, 6)), &requests, &calendar).unwrap();

    let (first, last) = schedule.span().unwrap();
    assert_eq!(first, d(2025, 1, 6));
    assert_eq!(last, schedule.tasks()[1].end);
}

#[test]
fn dataframe_exposes_resolved_rows() {
    let calendar = WorkCalendar::default();
    let requests = vec![TaskRequest::new("Survey", 1), TaskRequest::new("Draft", 2)];

    let schedule = Schedule::build(metadata(d(2025, 1, 6)), &requests, &calendar).unwrap();
    let df = schedule.dataframe().unwrap();

    assert_eq!(df.height(), 2);
    for name in ["id", "name", "working_days", "calendar_days", "start", "end"] {
        assert!(df.column(name).is_ok(), "missing column {name}");
    }

    let epoch = d(1970, 1, 1);
    let to_days = |dt: NaiveDate| (dt - epoch).num_days() as i32;

    let starts = df.column("start").unwrap().date().unwrap();
    let ends = df.column("end").unwrap().date().unwrap();
    assert_eq!(starts.get(0), Some(to_days(d(2025, 1, 6))));
    assert_eq!(ends.get(0), Some(to_days(d(2025, 1, 7))));
    assert_eq!(starts.get(1), Some(to_days(d(2025, 1, 7))));
    assert_eq!(ends.get(1), Some(to_days(d(2025, 1, 9))));
}
