use crate::calendar::WorkCalendar;
use crate::task::{ScheduledTask, TaskRequest};
use chrono::{Duration, NaiveDate};
use log::debug;
use std::fmt;

/// Which chain date was missing when resolution stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Start => "start",
            DateField::End => "end",
        }
    }
}

/// The first task in iteration order whose start or end date could not be
/// resolved. Resolution halts here; nothing past this task is scheduled and
/// no date is ever guessed in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainBreak {
    pub task: String,
    pub missing: DateField,
}

impl fmt::Display for ChainBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "task '{}' has no resolved {} date",
            self.task,
            self.missing.as_str()
        )
    }
}

impl std::error::Error for ChainBreak {}

/// Resolves concrete dates for an ordered task list by chaining each task's
/// start to its predecessor's end.
pub struct ChainPass<'a> {
    calendar: &'a WorkCalendar,
}

impl<'a> ChainPass<'a> {
    pub fn new(calendar: &'a WorkCalendar) -> Self {
        Self { calendar }
    }

    /// Walk `requests` in order: the first task starts at `project_start`,
    /// every later task starts on its predecessor's end date, and each end is
    /// the start advanced by the calendar span covering the requested working
    /// days. A zero-duration task ends on its own start date, so the task
    /// after it starts there too.
    pub fn execute(
        &self,
        project_start: NaiveDate,
        requests: &[TaskRequest],
    ) -> Result<Vec<ScheduledTask>, ChainBreak> {
        let mut resolved: Vec<ScheduledTask> = Vec::with_capacity(requests.len());
        // Starts and ends stay optional while the pass runs so an unresolved
        // chain state is representable, not papered over with a default.
        let mut starts: Vec<Option<NaiveDate>> = vec![None; requests.len()];
        let mut ends: Vec<Option<NaiveDate>> = vec![None; requests.len()];

        for (i, request) in requests.iter().enumerate() {
            starts[i] = if i == 0 {
                Some(project_start)
            } else {
                ends[i - 1]
            };

            if i > 0 && starts[i].is_none() {
                // A predecessor without an end date poisons every later task;
                // halt at the break instead of guessing.
                Self::log_resolved_prefix(&resolved);
                return Err(ChainBreak {
                    task: requests[i - 1].name.clone(),
                    missing: DateField::End,
                });
            }

            let (start, end) = match starts[i] {
                Some(start) => {
                    let elapsed = self
                        .calendar
                        .elapsed_calendar_days(start, request.working_days);
                    (start, start + Duration::days(elapsed))
                }
                None => {
                    Self::log_resolved_prefix(&resolved);
                    return Err(ChainBreak {
                        task: request.name.clone(),
                        missing: DateField::Start,
                    });
                }
            };

            ends[i] = Some(end);
            resolved.push(ScheduledTask {
                name: request.name.clone(),
                working_days: request.working_days,
                start,
                end,
            });
        }

        Ok(resolved)
    }

    fn log_resolved_prefix(resolved: &[ScheduledTask]) {
        debug!("chain state at break point:");
        for task in resolved {
            debug!("  {} {} -> {}", task.name, task.start, task.end);
        }
    }
}
