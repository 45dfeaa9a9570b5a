use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::periods::{expand_periods, extract_periods};
use crate::services::period_yaml::{
    load_dates_from_yaml_file, load_periods_from_yaml_file, serialize_dates_to_yaml,
    serialize_periods_to_yaml,
};

pub fn periods_command(cmd: Commands) -> ExitCode {
    let Commands::Periods {
        input,
        output,
        expand,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let mut buffer = Vec::new();
    let summary = if expand {
        let periods = match load_periods_from_yaml_file(&input) {
            Ok(periods) => periods,
            Err(e) => {
                eprintln!("Failed to load periods: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        let dates = expand_periods(&periods);
        if let Err(e) = serialize_dates_to_yaml(&mut buffer, &dates) {
            eprintln!("Failed to serialize dates: {e:?}");
            return ExitCode::FAILURE;
        }
        format!("{} dates written to {output}", dates.len())
    } else {
        let dates = match load_dates_from_yaml_file(&input) {
            Ok(dates) => dates,
            Err(e) => {
                eprintln!("Failed to load dates: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        let periods = extract_periods(&dates);
        if let Err(e) = serialize_periods_to_yaml(&mut buffer, &periods) {
            eprintln!("Failed to serialize periods: {e:?}");
            return ExitCode::FAILURE;
        }
        format!("{} periods written to {output}", periods.len())
    };

    if let Err(e) = std::fs::write(&output, buffer) {
        eprintln!("Failed to write output file: {e:?}");
        return ExitCode::FAILURE;
    }
    println!("{summary}");
    ExitCode::SUCCESS
}
