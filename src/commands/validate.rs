//! Validate command - check the built-in tables.

use anyhow::{Context, Result};
use clap::Args;

use pejelagarto::tables::{self, Component};
use pejelagarto::transform::letters;

use super::{CommandContext, CommandExecutor};

/// Validate the substitution maps, vowel wheels and invisible alphabets.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Also print table statistics
    #[arg(short, long)]
    pub stats: bool,
}

impl CommandExecutor for ValidateCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        tables::validate_tables().context("Table validation failed")?;
        println!("Tables OK");

        if self.stats || ctx.settings.verbose {
            let map = letters::substitution_map();
            println!();
            println!("Letter map:      {} pairs", tables::LETTER_MAP.len());
            println!("Conjunction map: {} pairs", tables::CONJUNCTION_MAP.len());
            println!("Punctuation map: {} pairs", tables::PUNCTUATION_MAP.len());
            println!(
                "Letter layers:   {} forward / {} inverse rules",
                map.forward_len(),
                map.inverse_len()
            );
            for component in Component::ALL {
                println!(
                    "{:<7} alphabet: {} code points",
                    component.name(),
                    component.alphabet().len()
                );
            }
        }

        Ok(())
    }
}
