use crate::calendar::WorkCalendar;
use crate::schedule::Schedule;
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::io;
use std::path::Path;

const WINDOW_PAD_DAYS: i64 = 5;
const DAY_WIDTH: f64 = 28.0;
const ROW_HEIGHT: f64 = 34.0;
const BAR_HEIGHT: f64 = 18.0;
const MARGIN_LEFT: f64 = 150.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICK_STEP_DAYS: i64 = 7;
const BAR_FILL: &str = "skyblue";
const NON_WORKING_FILL: &str = "lightgray";

#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    EmptySchedule,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(err) => write!(f, "io error: {err}"),
            ChartError::EmptySchedule => write!(f, "schedule contains no tasks to draw"),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<io::Error> for ChartError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Renders a resolved schedule as an SVG timeline: one bar per task row,
/// non-working days shaded across the display window, date labels at both
/// ends of each bar.
pub struct GanttChart<'a> {
    schedule: &'a Schedule,
    calendar: &'a WorkCalendar,
}

impl<'a> GanttChart<'a> {
    pub fn new(schedule: &'a Schedule, calendar: &'a WorkCalendar) -> Self {
        Self { schedule, calendar }
    }

    /// Display window: five calendar days of padding before the first start
    /// and after the latest end
    pub fn window(&self) -> Result<(NaiveDate, NaiveDate), ChartError> {
        let (first_start, last_end) = self.schedule.span().ok_or(ChartError::EmptySchedule)?;
        Ok((
            first_start - Duration::days(WINDOW_PAD_DAYS),
            last_end + Duration::days(WINDOW_PAD_DAYS),
        ))
    }

    pub fn render(&self) -> Result<String, ChartError> {
        let (window_start, window_end) = self.window()?;
        let total_days = (window_end - window_start).num_days() + 1;
        let rows = self.schedule.len();

        let plot_height = rows as f64 * ROW_HEIGHT;
        let width = MARGIN_LEFT + total_days as f64 * DAY_WIDTH + MARGIN_RIGHT;
        let height = MARGIN_TOP + plot_height + MARGIN_BOTTOM;

        let x = |date: NaiveDate| {
            MARGIN_LEFT + (date - window_start).num_days() as f64 * DAY_WIDTH
        };

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">\n"
        ));
        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"white\"/>\n"
        ));

        // Shade every non-working day across the full plot height
        let mut day = window_start;
        while day <= window_end {
            if !self.calendar.is_working_day(day) {
                svg.push_str(&format!(
                    "  <rect x=\"{}\" y=\"{MARGIN_TOP}\" width=\"{DAY_WIDTH}\" height=\"{plot_height}\" \
                     fill=\"{NON_WORKING_FILL}\" fill-opacity=\"0.3\"/>\n",
                    x(day)
                ));
            }
            day = day + Duration::days(1);
        }

        // Task bars with start/end date labels
        for (row, task) in self.schedule.tasks().iter().enumerate() {
            let row_top = MARGIN_TOP + row as f64 * ROW_HEIGHT;
            let bar_y = row_top + (ROW_HEIGHT - BAR_HEIGHT) / 2.0;
            let text_y = row_top + ROW_HEIGHT / 2.0 + 4.0;
            let bar_width = task.calendar_days() as f64 * DAY_WIDTH;

            if bar_width > 0.0 {
                svg.push_str(&format!(
                    "  <rect x=\"{}\" y=\"{bar_y}\" width=\"{bar_width}\" height=\"{BAR_HEIGHT}\" \
                     fill=\"{BAR_FILL}\"/>\n",
                    x(task.start)
                ));
            }
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{text_y}\" font-size=\"10\" text-anchor=\"end\">{}</text>\n",
                x(task.start) - 4.0,
                task.start.format("%m-%d")
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{text_y}\" font-size=\"10\" text-anchor=\"start\">{}</text>\n",
                x(task.end) + 4.0,
                task.end.format("%m-%d")
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{text_y}\" font-size=\"12\" text-anchor=\"end\">{}</text>\n",
                MARGIN_LEFT - 8.0,
                xml_escape(&task.name)
            ));
        }

        // Date axis: baseline plus a tick label every week
        let axis_y = MARGIN_TOP + plot_height;
        svg.push_str(&format!(
            "  <line x1=\"{MARGIN_LEFT}\" y1=\"{axis_y}\" x2=\"{}\" y2=\"{axis_y}\" \
             stroke=\"black\"/>\n",
            width - MARGIN_RIGHT
        ));
        let mut tick = window_start;
        while tick <= window_end {
            svg.push_str(&format!(
                "  <line x1=\"{0}\" y1=\"{axis_y}\" x2=\"{0}\" y2=\"{1}\" stroke=\"black\"/>\n",
                x(tick),
                axis_y + 4.0
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-size=\"10\" text-anchor=\"middle\">{}</text>\n",
                x(tick),
                axis_y + 18.0,
                tick.format("%m-%d")
            ));
            tick = tick + Duration::days(TICK_STEP_DAYS);
        }

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"28\" font-size=\"16\" text-anchor=\"middle\">{}</text>\n",
            width / 2.0,
            xml_escape(&self.schedule.metadata().project_name)
        ));
        svg.push_str("</svg>\n");

        Ok(svg)
    }

    /// Render and write the chart to a caller-chosen location
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), ChartError> {
        let svg = self.render()?;
        std::fs::write(path, svg)?;
        Ok(())
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
