//! Core library modules for the headcount application.
//!
//! ## Features
//!
//! - **Records**: Group records, totals and the daily log file naming
//! - **Persistence**: JSON storage of the daily log with fail-soft loading
//! - **Input**: Classification of operator input
//! - **Display**: 12-hour clock formatting, display rows and the board view
//! - **Session**: The interactive counting loop
//! - **Infrastructure**: Configuration and messaging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use headcount::libs::store::GroupStore;
//! use headcount::libs::group::total_people;
//!
//! let store = GroupStore::today(".");
//! let records = GroupStore::append(&store.load(), 3);
//! store.save(&records);
//! println!("Total people: {}", total_people(&records));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod group;
pub mod input;
pub mod messages;
pub mod naming;
pub mod session;
pub mod store;
pub mod table;
pub mod view;
