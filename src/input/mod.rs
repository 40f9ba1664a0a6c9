use crate::calendar::WorkCalendar;
use crate::metadata::ProjectMetadata;
use crate::task::TaskRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InputError {
    Serialization(SerdeJsonError),
    Csv(csv::Error),
    Io(io::Error),
    InvalidData(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Serialization(err) => write!(f, "serialization error: {err}"),
            InputError::Csv(err) => write!(f, "csv error: {err}"),
            InputError::Io(err) => write!(f, "io error: {err}"),
            InputError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<SerdeJsonError> for InputError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type InputResult<T> = Result<T, InputError>;

/// One plan row as the user entered it. An absent working-day count removes
/// the entry from the chain entirely; it is neither scheduled nor blocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub working_days: Option<i64>,
}

impl PlanEntry {
    pub fn new(name: impl Into<String>, working_days: Option<i64>) -> Self {
        Self {
            name: name.into(),
            working_days,
        }
    }
}

/// Everything the input layer hands the scheduler: project metadata, the
/// explicit holiday dates, and the ordered task entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    pub tasks: Vec<PlanEntry>,
}

impl ProjectPlan {
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            holidays: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Ordered requests for the entries that carry a duration. Entries left
    /// blank are filtered out here, before scheduling begins, so the chain
    /// closes over the remaining tasks.
    pub fn requests(&self) -> Vec<TaskRequest> {
        self.tasks
            .iter()
            .filter_map(|entry| {
                entry
                    .working_days
                    .map(|days| TaskRequest::new(entry.name.clone(), days))
            })
            .collect()
    }

    /// Work calendar over the plan's explicit holiday list
    pub fn calendar(&self) -> WorkCalendar {
        WorkCalendar::with_holidays(self.holidays.iter().copied())
    }

    pub fn validate(&self) -> InputResult<()> {
        validate_entries(&self.tasks)
    }
}

/// Reject primitive values the scheduler must never see: negative durations
/// and a plan without a single scheduled entry.
pub fn validate_entries(entries: &[PlanEntry]) -> InputResult<()> {
    let mut scheduled = 0;
    for entry in entries {
        if let Some(days) = entry.working_days {
            if days < 0 {
                return Err(InputError::InvalidData(format!(
                    "task '{}' has negative working days {}",
                    entry.name, days
                )));
            }
            scheduled += 1;
        }
    }

    if scheduled == 0 {
        return Err(InputError::InvalidData(
            "no task durations provided".into(),
        ));
    }
    Ok(())
}

pub mod file;

pub use file::{load_plan_from_csv, load_plan_from_json};
