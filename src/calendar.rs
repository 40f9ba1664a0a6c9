use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Decides whether a date is a public holiday.
///
/// Implementations must be deterministic for a given date within one
/// scheduling run. Weekend classification is not the oracle's job; the
/// calendar handles Saturday/Sunday itself.
pub trait HolidayOracle {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Holiday oracle backed by an explicit set of dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedHolidays {
    dates: HashSet<NaiveDate>,
}

impl FixedHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Add a single holiday
    pub fn add(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Add the same fixed-date holiday for multiple years
    /// Example: Add Dec 24 (Christmas Eve) for 2025-2030
    pub fn add_recurring(&mut self, month: u32, day: u32, start_year: i32, end_year: i32) {
        for year in start_year..=end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.dates.insert(date);
            }
        }
    }
}

impl HolidayOracle for FixedHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Adapter exposing any `bdays` calendar (e.g.
/// `bdays::calendars::us::USSettlement`) as a holiday oracle.
pub struct BusinessCalendar<C>(pub C);

impl<C> HolidayOracle for BusinessCalendar<C>
where
    C: bdays::HolidayCalendar<NaiveDate>,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.0.is_holiday(date)
    }
}

/// Work calendar for a Mon-Fri work week: a day is a working day when it is
/// neither a weekend day nor a holiday according to the injected oracle.
pub struct WorkCalendar {
    oracle: Box<dyn HolidayOracle + Send + Sync>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new(FixedHolidays::new())
    }
}

impl WorkCalendar {
    pub fn new<O>(oracle: O) -> Self
    where
        O: HolidayOracle + Send + Sync + 'static,
    {
        Self {
            oracle: Box::new(oracle),
        }
    }

    /// Calendar over an explicit list of holiday dates
    pub fn with_holidays<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self::new(FixedHolidays::from_dates(dates))
    }

    /// Saturday/Sunday classification; computed here, never delegated
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Check if a date counts toward a task's working-day duration
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.oracle.is_holiday(date)
    }

    /// Calendar days that must elapse from `start` (inclusive) to accumulate
    /// `required_working_days` working days. Zero required days elapses zero
    /// calendar days.
    ///
    /// The scan is day by day: the oracle is an arbitrary predicate, so there
    /// is no closed form, and consecutive holiday runs or holidays landing on
    /// weekends fall out correctly without double counting.
    pub fn elapsed_calendar_days(&self, start: NaiveDate, required_working_days: i64) -> i64 {
        let mut cursor = start;
        let mut working_days = 0;
        let mut calendar_days = 0;

        while working_days < required_working_days {
            if self.is_working_day(cursor) {
                working_days += 1;
            }
            cursor = cursor + Duration::days(1);
            calendar_days += 1;
        }
        calendar_days
    }

    /// Get all working days in a date range (inclusive)
    pub fn working_days_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = start;

        while current <= end {
            if self.is_working_day(current) {
                days.push(current);
            }
            current = current + Duration::days(1);
        }
        days
    }

    /// Count working days in a date range (inclusive)
    pub fn count_working_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut count = 0;
        let mut current = start;

        while current <= end {
            if self.is_working_day(current) {
                count += 1;
            }
            current = current + Duration::days(1);
        }
        count
    }
}
