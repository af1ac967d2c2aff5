//! Strip command - remove the invisible timestamp.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pejelagarto::strip_invisible_timestamp;

use super::{write_output, CommandContext, CommandExecutor, InputArgs};

/// Remove the invisible timestamp code points, leaving everything else intact.
#[derive(Args, Debug)]
pub struct StripCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (prints to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for StripCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let text = self.input.read_text()?;
        let stripped = strip_invisible_timestamp(&text);
        write_output(self.output.as_deref(), stripped.as_bytes())
    }
}
