use crate::calculations::chain_pass::{ChainBreak, ChainPass};
use crate::calendar::WorkCalendar;
use crate::metadata::ProjectMetadata;
use crate::task::{ScheduledTask, TaskRequest};
use chrono::NaiveDate;
use polars::prelude::*;

/// An ordered, fully resolved schedule.
///
/// Row order is the input task order and carries the chain semantics: every
/// row's start equals the previous row's end, and the first row starts on the
/// project start date. Rows are immutable once built.
pub struct Schedule {
    metadata: ProjectMetadata,
    tasks: Vec<ScheduledTask>,
}

impl Schedule {
    /// Run the chain pass over `requests` and wrap the resolved rows.
    ///
    /// Requests with absent durations must already be excluded by the input
    /// layer; this never reorders, merges, or skips what it is given.
    pub fn build(
        metadata: ProjectMetadata,
        requests: &[TaskRequest],
        calendar: &WorkCalendar,
    ) -> Result<Self, ChainBreak> {
        let engine = ChainPass::new(calendar);
        let tasks = engine.execute(metadata.project_start_date, requests)?;
        Ok(Self { metadata, tasks })
    }

    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn project_start(&self) -> NaiveDate {
        self.metadata.project_start_date
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First start and latest end, when at least one task is scheduled
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first_start = self.tasks.first().map(|t| t.start)?;
        let last_end = self.tasks.iter().map(|t| t.end).max()?;
        Some((first_start, last_end))
    }

    pub fn dataframe(&self) -> PolarsResult<DataFrame> {
        if self.tasks.is_empty() {
            return Ok(DataFrame::empty_with_schema(&Self::default_schema()));
        }

        let mut df = self.tasks[0].to_dataframe_row(1)?;
        for (idx, task) in self.tasks.iter().enumerate().skip(1) {
            df = df.vstack(&task.to_dataframe_row(idx as i32 + 1)?)?;
        }
        Ok(df)
    }

    fn default_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("id".into(), DataType::Int32),
            Field::new("name".into(), DataType::String),
            Field::new("working_days".into(), DataType::Int64),
            Field::new("calendar_days".into(), DataType::Int64),
            Field::new("start".into(), DataType::Date),
            Field::new("end".into(), DataType::Date),
        ])
    }
}
