//! Pejelagarto - reversible text codec
//!
//! A CLI for translating between Human and Pejelagarto text.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{
    CommandContext, CommandExecutor, FromCommand, StripCommand, TimestampCommand, ToCommand,
    ValidateCommand,
};
use pejelagarto::config::{ConfigError, Settings};
use pejelagarto::logging::{default_log_level, init_logging};
use pejelagarto::validate_tables;

/// Pejelagarto - reversible text codec
///
/// Rewrites text with numbers in base 8/7, swapped letters, rotating accents
/// and flipped case, and hides a timestamp in invisible code points.
/// Every step is reversible.
#[derive(Parser)]
#[command(name = "pejelagarto")]
#[command(version)]
#[command(about = "Reversible Human <-> Pejelagarto text codec")]
#[command(long_about = None)]
struct Cli {
    /// Path to the settings file (default: ~/.pejelagarto/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Verbose output (prints every pipeline step to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode Human text into Pejelagarto
    To(ToCommand),

    /// Decode Pejelagarto text back to Human
    From(FromCommand),

    /// Remove the invisible timestamp from a text
    Strip(StripCommand),

    /// Print the invisible timestamp carried by a text
    Timestamp(TimestampCommand),

    /// Check the built-in tables
    Validate(ValidateCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::To(cmd) => cmd,
            Commands::From(cmd) => cmd,
            Commands::Strip(cmd) => cmd,
            Commands::Timestamp(cmd) => cmd,
            Commands::Validate(cmd) => cmd,
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => match Settings::load() {
            Err(ConfigError::NoConfigDir) => Ok(Settings::default()),
            other => other.context("Failed to load settings"),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_ref())?;
    settings.verbose |= cli.verbose;

    let level = cli
        .log_level
        .clone()
        .or_else(|| settings.log_level.clone())
        .unwrap_or_else(|| default_log_level(settings.verbose).to_string());
    init_logging(&level)?;

    // Broken tables are the only hard failure
    if !matches!(cli.command, Commands::Validate(_)) {
        validate_tables().context("Built-in tables are invalid")?;
    }

    let ctx = CommandContext { settings };
    cli.command.executor().execute(&ctx)
}
