use super::group::{total_people, GroupRecord};
use super::messages::Message;
use super::table::{to_display_rows_default, GROUP_COLUMN, PEOPLE_COLUMN, TIME_COLUMN};
use crate::msg_print;
use anyhow::Result;
use dialoguer::console::Term;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the board: the group table followed by the running totals,
    /// or a placeholder line when nothing was recorded yet.
    pub fn board(records: &[GroupRecord]) -> String {
        if records.is_empty() {
            return Message::NoGroupsYet.to_string();
        }

        let mut table = Table::new();
        table.set_titles(row![GROUP_COLUMN, PEOPLE_COLUMN, TIME_COLUMN]);
        for (label, display_row) in to_display_rows_default(records).iter() {
            table.add_row(row![label, display_row.people, display_row.time]);
        }

        format!(
            "{}\n{}\n{}",
            table.to_string().trim_end(),
            Message::GroupCount(records.len()),
            Message::TotalPeople(total_people(records))
        )
    }

    /// Clears the terminal when asked to and attached to one.
    pub fn clear(clear: bool) -> Result<()> {
        let term = Term::stdout();
        if clear && term.is_term() {
            term.clear_screen()?;
        }

        Ok(())
    }

    /// Clears the terminal (see [`View::clear`]) and prints the board.
    pub fn show_board(records: &[GroupRecord], clear: bool) -> Result<()> {
        Self::clear(clear)?;
        msg_print!(Self::board(records));

        Ok(())
    }
}
