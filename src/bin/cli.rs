use std::io::{self, Write};

use chrono::NaiveDate;
use gantt_tool::{
    GanttChart, PlanEntry, ProjectMetadata, ProjectPlan, Schedule, WorkCalendar,
    load_plan_from_csv, load_plan_from_json,
};
use polars::prelude::{AnyValue, DataFrame};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Resolve the chain and show the schedule\n  start <YYYY-MM-DD>                 Set the project start date\n  holiday <YYYY-MM-DD>               Add an explicit holiday\n  task <days|-> <name...>            Append a task ('-' leaves the duration blank)\n  load <json|csv> <path>             Load a plan file\n  chart <path.svg>                   Resolve the chain and write the chart\n  quit|exit                          Exit"
    );
}

fn cell_to_string(av: &AnyValue) -> String {
    match av {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::Date(days) => {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            (epoch + chrono::Duration::days(*days as i64))
                .format("%Y-%m-%d")
                .to_string()
        }
        other => other.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for (ci, col) in columns.iter().enumerate() {
        for row_idx in 0..df.height() {
            if let Ok(ref av) = col.get(row_idx) {
                let s = cell_to_string(av);
                if s.len() > widths[ci] {
                    widths[ci] = s.len();
                }
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in col_names.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row_idx in 0..df.height() {
        out.push('|');
        for (ci, col) in columns.iter().enumerate() {
            let s = col
                .get(row_idx)
                .map(|av| cell_to_string(&av))
                .unwrap_or_default();
            out.push(' ');
            out.push_str(&s);
            let pad = widths[ci].saturating_sub(s.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

/// Validate the plan and run the chain. Prints the diagnostic and returns
/// None on any failure so the loop stays alive.
fn build_schedule(plan: &ProjectPlan) -> Option<(Schedule, WorkCalendar)> {
    if let Err(e) = plan.validate() {
        println!("Input error: {e}");
        return None;
    }
    let calendar = plan.calendar();
    match Schedule::build(plan.metadata.clone(), &plan.requests(), &calendar) {
        Ok(schedule) => Some((schedule, calendar)),
        Err(e) => {
            println!("Schedule error: {e}");
            None
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let mut plan = ProjectPlan::new(ProjectMetadata::default());

    println!("Gantt Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                if let Some((schedule, _)) = build_schedule(&plan) {
                    match schedule.dataframe() {
                        Ok(df) => println!("{}", render_df_as_text_table(&df)),
                        Err(e) => println!("Error: {e}"),
                    }
                }
            }
            "start" => {
                let date_s = parts.next();
                match date_s {
                    Some(date_s) => {
                        let date = match NaiveDate::parse_from_str(date_s, "%Y-%m-%d") {
                            Ok(d) => d,
                            Err(_) => {
                                println!("Invalid date (YYYY-MM-DD)");
                                continue;
                            }
                        };
                        plan.metadata.project_start_date = date;
                        println!("Project start date set to {date}.");
                    }
                    None => println!("Usage: start <YYYY-MM-DD>"),
                }
            }
            "holiday" => {
                let date_s = parts.next();
                match date_s {
                    Some(date_s) => {
                        let date = match NaiveDate::parse_from_str(date_s, "%Y-%m-%d") {
                            Ok(d) => d,
                            Err(_) => {
                                println!("Invalid date (YYYY-MM-DD)");
                                continue;
                            }
                        };
                        plan.holidays.push(date);
                        println!("Holiday added: {date}.");
                    }
                    None => println!("Usage: holiday <YYYY-MM-DD>"),
                }
            }
            "task" => {
                let days_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (days_s, !rest.is_empty()) {
                    (Some(days_s), true) => {
                        let working_days = if days_s == "-" {
                            None
                        } else {
                            match days_s.parse::<i64>() {
                                Ok(v) => Some(v),
                                Err(_) => {
                                    println!("Invalid working days (integer or '-')");
                                    continue;
                                }
                            }
                        };
                        let name = rest.join(" ");
                        plan.tasks.push(PlanEntry::new(name.clone(), working_days));
                        match working_days {
                            Some(days) => println!("Task '{name}' added ({days} working days)."),
                            None => println!("Task '{name}' added (no duration; excluded from the chain)."),
                        }
                    }
                    _ => println!("Usage: task <days|-> <name...>"),
                }
            }
            "load" => {
                let format_s = parts.next();
                let path_s = parts.next();
                match (format_s, path_s) {
                    (Some("json"), Some(path)) => match load_plan_from_json(path) {
                        Ok(loaded) => {
                            plan = loaded;
                            println!("Plan loaded from {path}.");
                        }
                        Err(e) => println!("Load error: {e}"),
                    },
                    (Some("csv"), Some(path)) => match load_plan_from_csv(path) {
                        Ok(loaded) => {
                            let start = plan.metadata.project_start_date;
                            plan = loaded;
                            // CSV carries no metadata; keep the session's start date.
                            plan.metadata.project_start_date = start;
                            println!("Plan loaded from {path}.");
                        }
                        Err(e) => println!("Load error: {e}"),
                    },
                    _ => println!("Usage: load <json|csv> <path>"),
                }
            }
            "chart" => {
                let path_s = parts.next();
                match path_s {
                    Some(path) => {
                        if let Some((schedule, calendar)) = build_schedule(&plan) {
                            let chart = GanttChart::new(&schedule, &calendar);
                            match chart.save_svg(path) {
                                Ok(_) => println!("Chart saved to {path}."),
                                Err(e) => println!("Chart error: {e}"),
                            }
                        }
                    }
                    None => println!("Usage: chart <path.svg>"),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
