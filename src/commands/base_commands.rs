use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::cell_style::CalendarPurpose;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a tap scenario and print the resulting month grid
    Replay {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file for the committed selection events
        #[arg(short, long)]
        output: Option<String>,
        /// Optional style table YAML overriding the built-in styles
        #[arg(short, long)]
        styles: Option<String>,
        /// Month to display (YYYY-MM), defaults to the scenario's today
        #[arg(short, long)]
        month: Option<String>,
        /// Output format of the grid
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Fold a list of dates into contiguous periods, or expand periods back into dates
    Periods {
        /// Input YAML file (dates, or periods with --expand)
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Expand periods into single dates instead
        #[arg(short, long)]
        expand: bool,
    },
    /// Write a built-in style table as YAML
    Styles {
        /// Calendar purpose whose styles are written
        #[arg(short, long, value_enum)]
        purpose: CalendarPurpose,
        /// Output YAML file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_defaults_to_text_output_without_month() {
        let args = CliArgs::parse_from(["calpick", "replay", "-i", "scenario.yaml"]);

        if let Commands::Replay {
            input,
            output,
            month,
            format,
            ..
        } = args.command
        {
            assert_eq!(input, "scenario.yaml");
            assert_eq!(output, None);
            assert_eq!(month, None);
            assert_eq!(format, OutputFormat::Text);
        } else {
            panic!("expected replay command");
        }
    }

    #[test]
    fn styles_accepts_kebab_case_purposes() {
        let args = CliArgs::parse_from(["calpick", "styles", "-p", "check-in"]);

        if let Commands::Styles { purpose, output } = args.command {
            assert_eq!(purpose, CalendarPurpose::CheckIn);
            assert_eq!(output, None);
        } else {
            panic!("expected styles command");
        }
    }

    #[test]
    fn periods_expand_flag_defaults_to_false() {
        let args = CliArgs::parse_from(["calpick", "periods", "-i", "in.yaml", "-o", "out.yaml"]);

        if let Commands::Periods { expand, .. } = args.command {
            assert!(!expand);
        } else {
            panic!("expected periods command");
        }
    }
}
