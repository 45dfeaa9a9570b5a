use std::io::{self, Write};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::selection::SelectionEvent;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionEventRecord {
    Period {
        begin_date: Option<String>,
        end_date: Option<String>,
    },
    Dates {
        dates: Vec<String>,
    },
}

impl From<&SelectionEvent> for SelectionEventRecord {
    fn from(event: &SelectionEvent) -> Self {
        match event {
            SelectionEvent::Period(period) => SelectionEventRecord::Period {
                begin_date: period.begin_date.map(format_date),
                end_date: period.end_date.map(format_date),
            },
            SelectionEvent::Dates(dates) => SelectionEventRecord::Dates {
                dates: dates.iter().copied().map(format_date).collect(),
            },
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn selection_event_records(events: &[SelectionEvent]) -> Vec<SelectionEventRecord> {
    events.iter().map(SelectionEventRecord::from).collect()
}

pub fn serialize_selection_events_to_yaml<W: Write>(
    writer: &mut W,
    events: &[SelectionEvent],
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(&selection_event_records(events)).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::SelectedPeriod;
    use crate::test_support::on_date;

    #[test]
    fn period_events_are_written_with_their_endpoints() {
        let events = vec![
            SelectionEvent::Period(SelectedPeriod {
                begin_date: Some(on_date(2026, 2, 9)),
                end_date: None,
            }),
            SelectionEvent::Period(SelectedPeriod {
                begin_date: Some(on_date(2026, 2, 9)),
                end_date: Some(on_date(2026, 2, 12)),
            }),
        ];

        let mut buf = Vec::new();
        serialize_selection_events_to_yaml(&mut buf, &events).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("kind: period"));
        assert!(output.contains("begin_date:"));
        assert!(output.contains("2026-02-09"));
        assert!(output.contains("end_date: null"));
        assert!(output.contains("2026-02-12"));
    }

    #[test]
    fn date_set_events_keep_tap_order() {
        let events = vec![SelectionEvent::Dates(vec![
            on_date(2026, 2, 20),
            on_date(2026, 2, 3),
        ])];

        assert_eq!(
            selection_event_records(&events),
            vec![SelectionEventRecord::Dates {
                dates: vec!["2026-02-20".to_string(), "2026-02-03".to_string()],
            }]
        );
    }
}
