pub mod calculations;
pub mod calendar;
pub mod chart;
pub mod input;
pub mod metadata;
pub mod schedule;
pub mod task;

pub use calculations::chain_pass::{ChainBreak, ChainPass, DateField};
pub use calendar::{BusinessCalendar, FixedHolidays, HolidayOracle, WorkCalendar};
pub use chart::{ChartError, GanttChart};
pub use input::{
    InputError, PlanEntry, ProjectPlan, load_plan_from_csv, load_plan_from_json, validate_entries,
};
pub use metadata::ProjectMetadata;
pub use schedule::Schedule;
pub use task::{ScheduledTask, TaskRequest};
