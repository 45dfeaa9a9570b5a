use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::calendar_date::parse_date;
use crate::domain::date_range::DateRange;

#[derive(Error, Debug)]
pub enum PeriodYamlError {
    #[error("failed to read yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse yaml file {path}: {source}")]
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

#[derive(Serialize, Deserialize)]
struct PeriodRecord {
    begin: String,
    end: String,
}

/// Reads a YAML sequence of `YYYY-MM-DD` dates.
pub fn load_dates_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<NaiveDate>, PeriodYamlError> {
    let path = path.as_ref();
    let values: Vec<String> = read_yaml(path)?;
    let dates = values
        .iter()
        .map(|value| parse_file_date(value, path))
        .collect::<Result<Vec<_>, _>>()?;
    info!(path = %path.display(), dates = dates.len(), "loaded dates");
    Ok(dates)
}

/// Reads a YAML sequence of `{begin, end}` records.
pub fn load_periods_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<DateRange>, PeriodYamlError> {
    let path = path.as_ref();
    let records: Vec<PeriodRecord> = read_yaml(path)?;
    let periods = records
        .iter()
        .map(|record| {
            let begin = parse_file_date(&record.begin, path)?;
            let end = parse_file_date(&record.end, path)?;
            DateRange::new(begin, end).map_err(|_| PeriodYamlError::InvalidPeriod {
                path: path.to_path_buf(),
                begin,
                end,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!(path = %path.display(), periods = periods.len(), "loaded periods");
    Ok(periods)
}

pub fn serialize_periods_to_yaml<W: Write>(writer: &mut W, periods: &[DateRange]) -> io::Result<()> {
    let records: Vec<PeriodRecord> = periods
        .iter()
        .map(|period| PeriodRecord {
            begin: period.begin().format("%Y-%m-%d").to_string(),
            end: period.end().format("%Y-%m-%d").to_string(),
        })
        .collect();

    let yaml = serde_yaml::to_string(&records).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn serialize_dates_to_yaml<W: Write>(writer: &mut W, dates: &[NaiveDate]) -> io::Result<()> {
    let records: Vec<String> = dates
        .iter()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect();

    let yaml = serde_yaml::to_string(&records).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn read_yaml<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T, PeriodYamlError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PeriodYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| PeriodYamlError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_file_date(value: &str, origin_path: &Path) -> Result<NaiveDate, PeriodYamlError> {
    parse_date(value).ok_or_else(|| PeriodYamlError::InvalidDate {
        path: origin_path.to_path_buf(),
        value: value.to_string(),
    })
}
