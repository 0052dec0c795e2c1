//! Display implementation for headcount application messages.
//!
//! Every user-facing string of the application lives here, so the session,
//! the board view and the configuration layer never format text on their
//! own. The messaging macros add the emoji prefixes on top of this text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into the text shown to the operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use headcount::libs::messages::Message;
    ///
    /// assert_eq!(Message::TotalPeople(10).to_string(), "Total people: 10");
    /// assert_eq!(Message::NoGroupsYet.to_string(), "No groups recorded yet.");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::PromptGroupSize => r#"Enter number of people in the next group (or type "exit" or "x" to stop)"#.to_string(),
            Message::InvalidCount => "Please enter a valid number.".to_string(),
            Message::Exiting => "Exiting...".to_string(),
            Message::LoadedExistingData(file) => format!("Loaded existing data from {}", file),
            Message::GroupRecorded(id, people) => format!("Group {} recorded with {} people", id, people),

            // === BOARD MESSAGES ===
            Message::NoGroupsYet => "No groups recorded yet.".to_string(),
            Message::GroupCount(count) => format!("Current count of groups: {}", count),
            Message::TotalPeople(total) => format!("Total people: {}", total),

            // === STORAGE MESSAGES ===
            Message::SaveFailed(path) => format!("Failed to save groups to {}", path),
            Message::LogDiscarded(error) => format!("Existing log ignored, starting with an empty one: {}", error),
            Message::LogDirCreateFailed(path) => format!("Failed to create log directory {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigParseError(error) => format!("Failed to parse configuration, using defaults: {}", error),
        };

        write!(f, "{}", text)
    }
}
