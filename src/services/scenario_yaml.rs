use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::calendar_date::parse_date;
use crate::domain::cell_style::CalendarPurpose;
use crate::domain::date_range::DateRange;
use crate::domain::periods::expand_periods;
use crate::services::replay::Scenario;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid date format in {path}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },
    #[error("invalid period in {path}: begin {begin} is after end {end}")]
    InvalidPeriod {
        path: PathBuf,
        begin: NaiveDate,
        end: NaiveDate,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    purpose: CalendarPurpose,
    today: String,
    already_selected: Option<Vec<String>>,
    already_selected_periods: Option<Vec<PeriodRecord>>,
    taps: Option<Vec<String>>,
    commit_each_tap: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct PeriodRecord {
    begin: String,
    end: String,
}

pub fn load_scenario_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ScenarioYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = deserialize_scenario_from_yaml_str(&contents, path)?;
    info!(
        path = %path.display(),
        taps = scenario.taps.len(),
        committed = scenario.already_selected.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

fn deserialize_scenario_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord =
        serde_yaml::from_str(input).map_err(|source| ScenarioYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;

    let today = parse_scenario_date(&record.today, origin_path)?;

    let mut already_selected = parse_dates(record.already_selected, origin_path)?;
    let periods = record
        .already_selected_periods
        .unwrap_or_default()
        .into_iter()
        .map(|period| period_from_record(period, origin_path))
        .collect::<Result<Vec<_>, _>>()?;
    already_selected.extend(expand_periods(&periods));

    Ok(Scenario {
        purpose: record.purpose,
        today,
        already_selected,
        taps: parse_dates(record.taps, origin_path)?,
        commit_each_tap: record.commit_each_tap.unwrap_or(true),
    })
}

fn parse_dates(
    values: Option<Vec<String>>,
    origin_path: &Path,
) -> Result<Vec<NaiveDate>, ScenarioYamlError> {
    values
        .unwrap_or_default()
        .iter()
        .map(|value| parse_scenario_date(value, origin_path))
        .collect()
}

fn period_from_record(
    value: PeriodRecord,
    origin_path: &Path,
) -> Result<DateRange, ScenarioYamlError> {
    let begin = parse_scenario_date(&value.begin, origin_path)?;
    let end = parse_scenario_date(&value.end, origin_path)?;
    DateRange::new(begin, end).map_err(|_| ScenarioYamlError::InvalidPeriod {
        path: origin_path.to_path_buf(),
        begin,
        end,
    })
}

fn parse_scenario_date(value: &str, origin_path: &Path) -> Result<NaiveDate, ScenarioYamlError> {
    parse_date(value).ok_or_else(|| ScenarioYamlError::InvalidDate {
        path: origin_path.to_path_buf(),
        value: value.to_string(),
    })
}
