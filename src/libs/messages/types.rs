#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    PromptGroupSize,
    InvalidCount,
    Exiting,
    LoadedExistingData(String), // file name
    GroupRecorded(u32, u32),    // id, people

    // === BOARD MESSAGES ===
    NoGroupsYet,
    GroupCount(usize),
    TotalPeople(u64),

    // === STORAGE MESSAGES ===
    SaveFailed(String),        // path
    LogDiscarded(String),      // error
    LogDirCreateFailed(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigParseError(String), // error
}
