//! The counting session command.
//!
//! Resolves the log directory from the configuration, opens today's log and
//! runs the prompt loop. A terminal gets the interactive prompt; piped input
//! is read line by line so the tool can be scripted.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::{ReaderPrompter, Session, TerminalPrompter};
use crate::libs::store::GroupStore;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal};

pub fn cmd() -> Result<()> {
    let config = Config::read_or_default();
    let log_dir = config.log_dir();
    fs::create_dir_all(&log_dir).with_context(|| Message::LogDirCreateFailed(log_dir.display().to_string()))?;

    let session = Session::new(GroupStore::today(&log_dir), config.clear_screen);
    if io::stdin().is_terminal() {
        session.run(&mut TerminalPrompter)?;
    } else {
        let mut prompter = ReaderPrompter::new(io::stdin().lock(), io::stdout());
        session.run(&mut prompter)?;
    }

    Ok(())
}
