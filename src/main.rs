use std::io;
use std::process::ExitCode;

use calpick::commands::base_commands::{CliArgs, Commands};
use calpick::commands::periods_cmd::periods_command;
use calpick::commands::replay_cmd::replay_command;
use calpick::commands::styles_cmd::styles_command;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Replay { .. } => replay_command(cmd),
        cmd @ Commands::Periods { .. } => periods_command(cmd),
        cmd @ Commands::Styles { .. } => styles_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
