//! To command - encode Human text into Pejelagarto.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pejelagarto::encode_with_config;

use super::{write_output, CommandContext, CommandExecutor, InputArgs};

/// Encode Human text into Pejelagarto.
///
/// The current time (or the ISO-8601 timestamp on the last input line) is
/// hidden in the output as five invisible code points.
#[derive(Args, Debug)]
pub struct ToCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (prints to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the invisible timestamp placement (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommandExecutor for ToCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let input = self.input.read_bytes()?;

        let mut config = ctx.settings.encoder_config();
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        if config.verbose {
            eprintln!("Encoding {} bytes", input.len());
        }

        let coded = encode_with_config(&input, &config);
        write_output(self.output.as_deref(), coded.as_bytes())
    }
}
