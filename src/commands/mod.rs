pub mod count;

use anyhow::Result;
use clap::Parser;

/// Count arriving groups and keep a per-day log with a running total.
///
/// Runs a single interactive session; type a group size at the prompt and
/// `exit` or `x` to stop.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn menu() -> Result<()> {
        let _cli = Self::parse();
        count::cmd()
    }
}
