use super::{InputError, InputResult, PlanEntry, ProjectPlan};
use crate::metadata::ProjectMetadata;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// On-disk JSON plan document. Dates travel as text so a bad value surfaces
/// as a diagnostic naming the field rather than a bare serde error.
#[derive(Serialize, Deserialize)]
struct PlanDocument {
    project_name: String,
    start_date: String,
    #[serde(default)]
    holidays: Vec<String>,
    tasks: Vec<PlanEntryRecord>,
}

#[derive(Serialize, Deserialize)]
struct PlanEntryRecord {
    name: String,
    #[serde(default)]
    working_days: Option<i64>,
}

impl PlanDocument {
    fn into_plan(self) -> InputResult<ProjectPlan> {
        let start_date = parse_date(&self.start_date)?.ok_or_else(|| {
            InputError::InvalidData("start date is required".into())
        })?;

        let mut holidays = Vec::with_capacity(self.holidays.len());
        for text in &self.holidays {
            holidays.push(parse_date(text)?.ok_or_else(|| {
                InputError::InvalidData("holiday date must not be empty".into())
            })?);
        }

        let tasks = self
            .tasks
            .into_iter()
            .map(|record| PlanEntry::new(record.name, record.working_days))
            .collect();

        Ok(ProjectPlan {
            metadata: ProjectMetadata {
                project_name: self.project_name,
                project_start_date: start_date,
            },
            holidays,
            tasks,
        })
    }
}

pub fn load_plan_from_json<P: AsRef<Path>>(path: P) -> InputResult<ProjectPlan> {
    let file = File::open(path)?;
    let document: PlanDocument = serde_json::from_reader(file)?;
    document.into_plan()
}

#[derive(Serialize, Deserialize)]
struct PlanCsvRecord {
    name: String,
    working_days: String,
}

/// Load task entries from CSV (`name,working_days`, blank counts allowed).
///
/// CSV carries no metadata, so the default metadata is used; callers set the
/// project start date after load.
pub fn load_plan_from_csv<P: AsRef<Path>>(path: P) -> InputResult<ProjectPlan> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut tasks = Vec::new();
    for record in reader.deserialize::<PlanCsvRecord>() {
        let record = record?;
        tasks.push(PlanEntry::new(record.name, parse_i64(&record.working_days)?));
    }

    if tasks.is_empty() {
        return Err(InputError::InvalidData(
            "CSV file contained no tasks".into(),
        ));
    }

    let mut plan = ProjectPlan::new(ProjectMetadata::default());
    plan.tasks = tasks;
    Ok(plan)
}

fn parse_date(input: &str) -> InputResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|e| InputError::InvalidData(format!("invalid date '{input}': {e}")))
}

fn parse_i64(input: &str) -> InputResult<Option<i64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    input
        .trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|e| InputError::InvalidData(format!("invalid integer '{input}': {e}")))
}
