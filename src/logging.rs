//! Diagnostic logging bootstrap.
//!
//! Logs go to stderr so they never mix with the table and prompts on stdout.
//! The default level only lets warnings through; each `-v` raises it a step.

use flexi_logger::{Logger, LoggerHandle};

use crate::error::Result;

/// Map the `-v` count to a log specification.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start the logger. Keep the returned handle alive for the whole run.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(level_for(verbosity))?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
