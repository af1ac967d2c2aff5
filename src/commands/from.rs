//! From command - decode Pejelagarto back to Human text.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pejelagarto::{decode_with_config, strip_invisible_timestamp};

use super::{write_output, CommandContext, CommandExecutor, InputArgs};

/// Decode Pejelagarto text back to Human.
///
/// Decoding never fails. If the text carries an invisible timestamp it is
/// appended as a last line in ISO-8601 form.
///
/// Use -o/--output to write the raw bytes to a file (required for binary data).
/// Without -o, output is printed as text (lossy UTF-8 conversion).
#[derive(Args, Debug)]
pub struct FromCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file for the decoded bytes
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Drop the invisible timestamp instead of appending it
    #[arg(long)]
    pub strip_timestamp: bool,
}

impl CommandExecutor for FromCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut coded = self.input.read_text()?;
        if self.strip_timestamp {
            coded = strip_invisible_timestamp(&coded);
        }

        let decoded = decode_with_config(&coded, &ctx.settings.decoder_config());

        match self.output.as_deref() {
            Some(path) => write_output(Some(path), &decoded),
            None => write_output(None, String::from_utf8_lossy(&decoded).as_bytes()),
        }
    }
}
