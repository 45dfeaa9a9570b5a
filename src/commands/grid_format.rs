use chrono::Datelike;
use serde::Serialize;

use crate::domain::cell_style::{CellSelectionMode, CellStyles, StyleRole};
use crate::domain::selection::SelectionManipulation;
use crate::services::month_grid::MonthGrid;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CellModeRecord {
    pub date: String,
    pub mode: &'static str,
    pub style: &'static str,
    pub interactive: bool,
}

/// Modes of every day that belongs to the grid's month, in date order.
pub fn cell_mode_records<S: SelectionManipulation>(
    grid: &MonthGrid,
    selection: &S,
    styles: &CellStyles,
) -> Vec<CellModeRecord> {
    grid.month_dates()
        .map(|date| {
            let mode = selection.cell_selection_mode(date, styles);
            CellModeRecord {
                date: date.format("%Y-%m-%d").to_string(),
                mode: mode.tag(),
                style: mode.role().as_str(),
                interactive: mode.style().interactive,
            }
        })
        .collect()
}

pub fn format_month_grid<S: SelectionManipulation>(
    grid: &MonthGrid,
    selection: &S,
    styles: &CellStyles,
) -> String {
    let month_name = MONTH_NAMES
        .get(grid.month as usize - 1)
        .copied()
        .unwrap_or("?");

    let mut lines = Vec::new();
    lines.push(format!("{month_name} {}", grid.year));
    lines.push(" Mo  Tu  We  Th  Fr  Sa  Su".to_string());
    for week in &grid.rows {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.belongs_to_month {
                    format_cell(cell.date.day(), selection.cell_selection_mode(cell.date, styles))
                } else {
                    "    ".to_string()
                }
            })
            .collect();
        lines.push(cells.join("").trim_end().to_string());
    }
    lines.push(String::new());
    lines.push("Legend: [d begin, =d= medium, d] end, (d) selection, xdx committed, +d+ available, d. disabled".to_string());

    lines.join("\n")
}

fn format_cell(day: u32, mode: CellSelectionMode<'_>) -> String {
    let (open, close) = match mode {
        CellSelectionMode::Begin(_) => ('[', ' '),
        CellSelectionMode::End(_) => (' ', ']'),
        CellSelectionMode::Medium(_) => ('=', '='),
        CellSelectionMode::Only(style) => match style.role {
            StyleRole::Selection => ('(', ')'),
            StyleRole::Selected => ('x', 'x'),
            StyleRole::Enabled => ('+', '+'),
            StyleRole::Disabled => (' ', '.'),
        },
        CellSelectionMode::None(style) => match style.role {
            StyleRole::Disabled => (' ', '.'),
            _ => (' ', ' '),
        },
    };
    format!("{open}{day:>2}{close}")
}
