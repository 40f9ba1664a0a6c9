use chrono::NaiveDate;
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A task waiting to be scheduled: a name and how many working days it needs.
///
/// Names need not be unique; each occurrence is scheduled as its own row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub name: String,
    pub working_days: i64,
}

impl TaskRequest {
    pub fn new(name: impl Into<String>, working_days: i64) -> Self {
        Self {
            name: name.into(),
            working_days,
        }
    }
}

/// A task with its chain dates resolved. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub name: String,
    pub working_days: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ScheduledTask {
    /// Calendar days spanned from start to end
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn to_dataframe_row(&self, id: i32) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(6);

        let id_data: [i32; 1] = [id];
        columns.push(Series::new(PlSmallStr::from_static("id"), id_data).into_column());

        let name_data: [&str; 1] = [self.name.as_str()];
        columns.push(Series::new(PlSmallStr::from_static("name"), name_data).into_column());

        let working_data: [i64; 1] = [self.working_days];
        columns.push(
            Series::new(PlSmallStr::from_static("working_days"), working_data).into_column(),
        );

        let calendar_data: [i64; 1] = [self.calendar_days()];
        columns.push(
            Series::new(PlSmallStr::from_static("calendar_days"), calendar_data).into_column(),
        );

        columns.push(Self::series_from_date("start", self.start)?.into_column());
        columns.push(Self::series_from_date("end", self.end)?.into_column());

        DataFrame::new(columns)
    }

    fn series_from_date(name: &str, date: NaiveDate) -> PolarsResult<Series> {
        let data: [i32; 1] = [Self::date_to_i32(date)];
        Series::new(name.into(), data).cast(&DataType::Date)
    }

    /// Days since the Unix epoch, the representation Polars uses for `Date`
    fn date_to_i32(date: NaiveDate) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        (date - epoch).num_days() as i32
    }
}
