//! Process-wide logger bootstrap for the CLI.
//!
//! The library only emits `log` records. The binary decides whether and
//! where they go by calling [`init_logging`] once at startup.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Errors raised while setting up logging.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected off|trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    #[error("logging already initialized with level `{current}`; refusing to switch to `{requested}`")]
    AlreadyInitialized {
        current: &'static str,
        requested: &'static str,
    },

    #[error("failed to start logger: {0}")]
    Start(#[from] FlexiLoggerError),
}

/// Initializes stderr logging at `level`.
///
/// Calling it again with the same level is a no-op; another level is rejected.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_str(level)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()?;

        info!(
            "event=logging_init module=cli status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(LoggingError::AlreadyInitialized {
            current: state.level,
            requested: level,
        });
    }
    Ok(())
}

/// Level of the active logger, if one was started.
pub fn logging_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// Default level: `warn`, or `debug` when verbose.
pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}
