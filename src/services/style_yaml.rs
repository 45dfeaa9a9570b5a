use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::cell_style::{CalendarPurpose, CellStyle, CellStyles, StyleRole};

#[derive(Error, Debug)]
pub enum StyleYamlError {
    #[error("failed to read style yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse style yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize style table: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("failed to write style table: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleTableRecord {
    enabled: Option<CellStyle>,
    disabled: Option<CellStyle>,
    selection: Option<CellStyle>,
    selected: Option<CellStyle>,
}

#[derive(Serialize)]
struct StyleTableOutput<'a> {
    enabled: &'a CellStyle,
    disabled: &'a CellStyle,
    selection: &'a CellStyle,
    selected: &'a CellStyle,
}

/// Loads a style table override. Roles missing from the file keep the
/// built-in style of `purpose`.
pub fn load_cell_styles_from_yaml_file<P: AsRef<Path>>(
    path: P,
    purpose: CalendarPurpose,
) -> Result<CellStyles, StyleYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| StyleYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let styles = deserialize_cell_styles_from_yaml_str(&contents, path, purpose)?;
    info!(path = %path.display(), "loaded style table");
    Ok(styles)
}

fn deserialize_cell_styles_from_yaml_str(
    input: &str,
    origin_path: &Path,
    purpose: CalendarPurpose,
) -> Result<CellStyles, StyleYamlError> {
    let record: StyleTableRecord = if input.trim().is_empty() {
        StyleTableRecord::default()
    } else {
        serde_yaml::from_str(input).map_err(|source| StyleYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?
    };

    let mut styles = purpose.cell_styles();
    let overrides = [
        (StyleRole::Enabled, record.enabled),
        (StyleRole::Disabled, record.disabled),
        (StyleRole::Selection, record.selection),
        (StyleRole::Selected, record.selected),
    ];
    for (role, style) in overrides {
        if let Some(style) = style {
            *styles.get_mut(role) = CellStyle { role, ..style };
        }
    }
    Ok(styles)
}

pub fn serialize_cell_styles_to_yaml<W: Write>(
    writer: &mut W,
    styles: &CellStyles,
) -> Result<(), StyleYamlError> {
    let output = StyleTableOutput {
        enabled: &styles.enabled,
        disabled: &styles.disabled,
        selection: &styles.selection,
        selected: &styles.selected,
    };
    let yaml = serde_yaml::to_string(&output)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}
