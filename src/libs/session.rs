//! The interactive counting session.
//!
//! The session state is an explicit value: every line typed by the operator
//! goes through [`Session::step`], which takes the current state and returns
//! the next one together with what happened. [`Session::run`] is the thin
//! blocking loop around it that talks to the terminal.
//!
//! ## Step Outcomes
//!
//! - **Exit**: `exit` or `x` was typed, nothing is written
//! - **Rejected**: the line was not a positive count, state unchanged
//! - **Recorded**: a group was appended and the whole log saved; when the
//!   save fails the group is kept in memory and goes out with the next save

use super::group::{total_people, GroupRecord};
use super::input::{classify, InputKind};
use super::messages::Message;
use super::error::StoreError;
use super::store::GroupStore;
use super::view::View;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::Input;
use std::io::{BufRead, Write};

/// Source of operator input, one line per prompt.
pub trait Prompter {
    /// Shows `prompt` and blocks for the next line.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive prompt on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let line = Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text()?;
        Ok(Some(line))
    }
}

/// Line-oriented prompt over any reader, for piped input.
pub struct ReaderPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
    }
}

/// In-memory daily log owned by the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub records: Vec<GroupRecord>,
}

impl SessionState {
    pub fn new(records: Vec<GroupRecord>) -> Self {
        Self { records }
    }

    pub fn total(&self) -> u64 {
        total_people(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Rejected,
    Recorded { saved: bool },
}

/// Where the initial state of a session came from.
#[derive(Debug)]
pub enum LogOrigin {
    /// No log for the day yet.
    New,
    /// The day's log was read back.
    Loaded,
    /// The day's log exists but could not be used; the session starts empty
    /// and the next accepted entry replaces the file.
    Discarded(StoreError),
}

/// Result of feeding one line to the session.
#[derive(Debug)]
pub struct Step {
    pub state: SessionState,
    pub outcome: Outcome,
}

pub struct Session {
    store: GroupStore,
    clear_screen: bool,
}

impl Session {
    pub fn new(store: GroupStore, clear_screen: bool) -> Self {
        Self { store, clear_screen }
    }

    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    /// Initial state: whatever today's log already holds.
    pub fn start(&self) -> SessionState {
        self.open().0
    }

    /// Initial state together with how it was obtained.
    pub fn open(&self) -> (SessionState, LogOrigin) {
        if !self.store.exists() {
            return (SessionState::default(), LogOrigin::New);
        }

        match self.store.try_load() {
            Ok(records) => (SessionState::new(records), LogOrigin::Loaded),
            Err(err) => (SessionState::default(), LogOrigin::Discarded(err)),
        }
    }

    /// Applies one line of input to `state`.
    pub fn step(&self, state: SessionState, input: &str) -> Step {
        match classify(input) {
            InputKind::Exit => Step {
                state,
                outcome: Outcome::Exit,
            },
            InputKind::Invalid => Step {
                state,
                outcome: Outcome::Rejected,
            },
            InputKind::Count(people) => {
                let records = GroupStore::append(&state.records, people);
                let saved = self.store.save(&records);
                if let Some(record) = records.last() {
                    msg_debug!(Message::GroupRecorded(record.id, record.people));
                }
                Step {
                    state: SessionState::new(records),
                    outcome: Outcome::Recorded { saved },
                }
            }
        }
    }

    /// Runs the prompt loop until the exit command or the end of input.
    ///
    /// Returns the final state.
    pub fn run<P: Prompter>(&self, prompter: &mut P) -> Result<SessionState> {
        let (mut state, origin) = self.open();

        View::clear(self.clear_screen)?;
        match origin {
            LogOrigin::New => {}
            LogOrigin::Loaded => msg_info!(Message::LoadedExistingData(self.store.path().display().to_string())),
            LogOrigin::Discarded(err) => msg_warning!(Message::LogDiscarded(err.to_string())),
        }
        View::show_board(&state.records, false)?;

        let prompt = Message::PromptGroupSize.to_string();
        loop {
            let Some(line) = prompter.next_line(&prompt)? else {
                msg_print!(Message::Exiting);
                break;
            };

            let step = self.step(state, &line);
            state = step.state;

            match step.outcome {
                Outcome::Exit => {
                    msg_print!(Message::Exiting);
                    break;
                }
                Outcome::Rejected => msg_error!(Message::InvalidCount),
                Outcome::Recorded { saved } => {
                    View::show_board(&state.records, self.clear_screen)?;
                    if !saved {
                        msg_error!(Message::SaveFailed(self.store.path().display().to_string()));
                    }
                }
            }
        }

        Ok(state)
    }
}
