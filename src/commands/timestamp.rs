//! Timestamp command - show the timestamp hidden in a coded text.

use anyhow::{bail, Result};
use clap::Args;

use pejelagarto::read_invisible_timestamp;

use super::{CommandContext, CommandExecutor, InputArgs};

/// Print the invisible timestamp carried by a Pejelagarto text.
#[derive(Args, Debug)]
pub struct TimestampCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CommandExecutor for TimestampCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let text = self.input.read_text()?;

        match read_invisible_timestamp(&text) {
            Some(timestamp) => {
                println!("{}", timestamp);
                Ok(())
            }
            None => bail!("No invisible timestamp found (day, month and year are required)"),
        }
    }
}
