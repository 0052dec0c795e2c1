//! Projection of the daily log into display rows.

use super::clock::display_time;
use super::group::GroupRecord;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const GROUP_COLUMN: &str = "Group";
pub const PEOPLE_COLUMN: &str = "# of People";
pub const TIME_COLUMN: &str = "Time";

/// One row of the board, keyed by its group label in [`DisplayRows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    #[serde(rename = "# of People")]
    pub people: u32,
    #[serde(rename = "Time")]
    pub time: String,
}

/// Ordered mapping from group label (`Group 1`, `Group 2`, ...) to its row.
///
/// Iteration and serialization follow log order, so `Group 10` comes after
/// `Group 9`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayRows {
    rows: Vec<(String, DisplayRow)>,
}

impl DisplayRows {
    pub fn get(&self, label: &str) -> Option<&DisplayRow> {
        self.rows.iter().find(|(key, _)| key == label).map(|(_, row)| row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DisplayRow)> {
        self.rows.iter().map(|(label, row)| (label.as_str(), row))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|(label, _)| label.as_str()).collect()
    }
}

impl Serialize for DisplayRows {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (label, row) in &self.rows {
            map.serialize_entry(label, row)?;
        }
        map.end()
    }
}

/// Label of the group at a zero-based position.
pub fn group_label(index: usize) -> String {
    format!("{} {}", GROUP_COLUMN, index + 1)
}

/// Builds the display rows, rendering each timestamp with `formatter`.
///
/// ```rust
/// use headcount::libs::group::GroupRecord;
/// use headcount::libs::table::to_display_rows;
///
/// let records = vec![GroupRecord::new(1, 3, "18:00:00")];
/// let rows = to_display_rows(&records, |time| format!("at {}", time));
/// assert_eq!(rows.get("Group 1").unwrap().time, "at 18:00:00");
/// ```
pub fn to_display_rows<F>(records: &[GroupRecord], formatter: F) -> DisplayRows
where
    F: Fn(&str) -> String,
{
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            (
                group_label(index),
                DisplayRow {
                    people: record.people,
                    time: formatter(&record.timestamp),
                },
            )
        })
        .collect();

    DisplayRows { rows }
}

/// Display rows with timestamps on a 12-hour clock.
pub fn to_display_rows_default(records: &[GroupRecord]) -> DisplayRows {
    to_display_rows(records, display_time)
}
