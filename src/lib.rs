//! # Headcount - interactive door tally
//!
//! A command-line utility for counting arriving groups (trick-or-treaters at
//! the door, visitors at a booth) with a per-day JSON log and a running total.
//!
//! ## Features
//!
//! - **Group Log**: Every group is recorded with its size and time of arrival
//! - **Daily Files**: One `groups_log_YYYY_MM_DD.json` file per day, resumed
//!   across runs on the same day
//! - **Running Board**: Table of all groups with a 12-hour clock and totals
//! - **Fail-Soft Storage**: Missing or corrupt logs start an empty day
//!
//! ## Usage
//!
//! ```rust,no_run
//! use headcount::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
