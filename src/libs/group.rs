use serde::{Deserialize, Serialize};

/// One arrival event in the daily log.
///
/// Field order is also the order of the keys in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Position in the day's log, starting at 1.
    pub id: u32,
    /// Number of people in the group.
    pub people: u32,
    /// Local time of recording, `HH:MM:SS`.
    pub timestamp: String,
}

impl GroupRecord {
    pub fn new(id: u32, people: u32, timestamp: impl Into<String>) -> Self {
        GroupRecord {
            id,
            people,
            timestamp: timestamp.into(),
        }
    }
}

/// Sum of `people` over all records; zero for an empty log.
pub fn total_people(records: &[GroupRecord]) -> u64 {
    records.iter().map(|record| u64::from(record.people)).sum()
}

/// Group sizes in log order.
pub fn people_counts(records: &[GroupRecord]) -> Vec<u32> {
    records.iter().map(|record| record.people).collect()
}
