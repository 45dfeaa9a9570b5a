use std::process::ExitCode;

use chrono::NaiveDate;
use serde::Serialize;

use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::grid_format::{CellModeRecord, cell_mode_records, format_month_grid};
use crate::services::month_grid::MonthGrid;
use crate::services::replay::replay_scenario;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::selection_yaml::{
    SelectionEventRecord, selection_event_records, serialize_selection_events_to_yaml,
};
use crate::services::style_yaml::load_cell_styles_from_yaml_file;

#[derive(Serialize)]
struct ReplayReport {
    month: String,
    cells: Vec<CellModeRecord>,
    events: Vec<SelectionEventRecord>,
    skipped_taps: Vec<String>,
}

pub fn replay_command(cmd: Commands) -> ExitCode {
    let Commands::Replay {
        input,
        output,
        styles,
        month,
        format,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let scenario = match load_scenario_from_yaml_file(&input) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load scenario: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let cell_styles = match styles {
        Some(path) => match load_cell_styles_from_yaml_file(&path, scenario.purpose) {
            Ok(styles) => styles,
            Err(e) => {
                eprintln!("Failed to load style table: {e:?}");
                return ExitCode::FAILURE;
            }
        },
        None => scenario.purpose.cell_styles(),
    };

    let first_of_month = match month.as_deref().map(parse_month) {
        Some(Some(date)) => date,
        Some(None) => {
            eprintln!("Failed to parse month: expected YYYY-MM");
            return ExitCode::FAILURE;
        }
        None => scenario.today,
    };
    let grid = match MonthGrid::containing(first_of_month, scenario.purpose.number_of_rows()) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build month grid: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = replay_scenario(&scenario);

    match format {
        OutputFormat::Text => {
            println!("{}", format_month_grid(&grid, &outcome.selection, &cell_styles));
            if !outcome.skipped_taps.is_empty() {
                println!(
                    "Skipped {} taps on dates before {}",
                    outcome.skipped_taps.len(),
                    scenario.today
                );
            }
        }
        OutputFormat::Json => {
            let report = ReplayReport {
                month: format!("{:04}-{:02}", grid.year, grid.month),
                cells: cell_mode_records(&grid, &outcome.selection, &cell_styles),
                events: selection_event_records(&outcome.events),
                skipped_taps: outcome
                    .skipped_taps
                    .iter()
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .collect(),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize replay report: {e:?}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if let Some(output) = output {
        let mut buffer = Vec::new();
        if let Err(e) = serialize_selection_events_to_yaml(&mut buffer, &outcome.events) {
            eprintln!("Failed to serialize selection events: {e:?}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write selection events: {e:?}");
            return ExitCode::FAILURE;
        }
        if format == OutputFormat::Text {
            println!("{} selection events written to {output}", outcome.events.len());
        }
    }

    ExitCode::SUCCESS
}

fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn parse_month_accepts_year_and_month() {
        assert_eq!(parse_month("2026-02"), Some(on_date(2026, 2, 1)));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("February"), None);
    }
}
