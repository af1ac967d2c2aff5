//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod from;
mod strip;
mod timestamp;
mod to;
mod validate;

pub use from::FromCommand;
pub use strip::StripCommand;
pub use timestamp::TimestampCommand;
pub use to::ToCommand;
pub use validate::ValidateCommand;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pejelagarto::config::Settings;

/// State shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Settings loaded from the configuration file.
    pub settings: Settings,
}

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Where a command reads its input from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to process (stdin is read when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the input from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Reads the raw input bytes.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        if let Some(text) = &self.text {
            return Ok(text.clone().into_bytes());
        }
        if let Some(path) = &self.file {
            return fs::read(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()));
        }

        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    }

    /// Reads the input as text. Invalid UTF-8 is replaced.
    pub fn read_text(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Writes `bytes` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
