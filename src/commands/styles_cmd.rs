use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::style_yaml::serialize_cell_styles_to_yaml;

pub fn styles_command(cmd: Commands) -> ExitCode {
    let Commands::Styles { purpose, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let mut buffer = Vec::new();
    if let Err(e) = serialize_cell_styles_to_yaml(&mut buffer, &purpose.cell_styles()) {
        eprintln!("Failed to serialize style table: {e:?}");
        return ExitCode::FAILURE;
    }

    match output {
        Some(output) => {
            if let Err(e) = std::fs::write(&output, buffer) {
                eprintln!("Failed to write style table: {e:?}");
                return ExitCode::FAILURE;
            }
            println!("Style table written to {output}");
        }
        None => print!("{}", String::from_utf8_lossy(&buffer)),
    }
    ExitCode::SUCCESS
}
