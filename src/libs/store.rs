//! Persistence of the daily group log.
//!
//! One JSON file per calendar day holds the full, ordered list of groups.
//! The file is rewritten in full after every accepted entry.
//!
//! ## Failure Policy
//!
//! - **Missing file**: an empty log, not an error
//! - **Unreadable or corrupt file**: an empty log; the failure is logged and
//!   the file stays on disk until the next successful save replaces it.
//!   A file that parses but breaks the log invariants (ids `1..=n` in order,
//!   at least one person per group, `HH:MM:SS` timestamps) counts as corrupt
//! - **Write failure**: `save` returns `false`, the caller reports it
//!
//! ## Usage
//!
//! ```rust,no_run
//! use headcount::libs::store::GroupStore;
//!
//! let store = GroupStore::today(".");
//! let records = store.load();
//! let records = GroupStore::append(&records, 4);
//! if !store.save(&records) {
//!     eprintln!("could not save {}", store.path().display());
//! }
//! ```

use super::clock::{current_timestamp, parse_timestamp};
use super::error::StoreError;
use super::group::GroupRecord;
use super::naming::log_filename;
use chrono::{Datelike, Local};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct GroupStore {
    path: PathBuf,
}

impl GroupStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GroupStore { path: path.into() }
    }

    /// Store for the log of `date` inside `dir`.
    pub fn for_date<D: Datelike>(dir: impl AsRef<Path>, date: &D) -> Self {
        Self::new(dir.as_ref().join(log_filename(date)))
    }

    /// Store for today's log inside `dir`.
    pub fn today(dir: impl AsRef<Path>) -> Self {
        Self::for_date(dir, &Local::now().date_naive())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the log, falling back to an empty one on any failure.
    pub fn load(&self) -> Vec<GroupRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "discarding unreadable group log");
                Vec::new()
            }
        }
    }

    /// Loads the log, reporting read and parse failures.
    ///
    /// A missing file is an empty log.
    pub fn try_load(&self) -> Result<Vec<GroupRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no group log yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records: Vec<GroupRecord> = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        check_records(&records).map_err(|reason| StoreError::Invalid {
            path: self.path.clone(),
            reason,
        })?;
        debug!(path = %self.path.display(), groups = records.len(), "group log loaded");
        Ok(records)
    }

    /// Writes the full log, returning `false` instead of an error.
    pub fn save(&self, records: &[GroupRecord]) -> bool {
        match self.try_save(records) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "group log not saved");
                false
            }
        }
    }

    /// Writes the full log as pretty-printed JSON, replacing the file.
    pub fn try_save(&self, records: &[GroupRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), groups = records.len(), "group log saved");
        Ok(())
    }

    /// Returns a copy of `records` with a new group stamped with the current time.
    pub fn append(records: &[GroupRecord], people: u32) -> Vec<GroupRecord> {
        Self::append_at(records, people, current_timestamp())
    }

    /// Returns a copy of `records` with a new group; the input is left untouched.
    ///
    /// The new id is one past the number of existing groups.
    pub fn append_at(records: &[GroupRecord], people: u32, timestamp: impl Into<String>) -> Vec<GroupRecord> {
        let next_id = u32::try_from(records.len()).map_or(u32::MAX, |len| len.saturating_add(1));
        let mut next = Vec::with_capacity(records.len() + 1);
        next.extend_from_slice(records);
        next.push(GroupRecord::new(next_id, people, timestamp));
        next
    }
}

/// Checks the invariants of a day's log; returns the first violation.
fn check_records(records: &[GroupRecord]) -> Result<(), String> {
    for (position, record) in records.iter().enumerate() {
        let expected_id = position + 1;
        if usize::try_from(record.id).ok() != Some(expected_id) {
            return Err(format!("group at position {} has id {}", expected_id, record.id));
        }
        if record.people == 0 {
            return Err(format!("group {} has no people", record.id));
        }
        if let Err(err) = parse_timestamp(&record.timestamp) {
            return Err(format!("group {}: {}", record.id, err));
        }
    }
    Ok(())
}
