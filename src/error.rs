//! Error types.
//!
//! Invalid user input is never an `Error`: the readers re-prompt on a
//! [`ParseError`](crate::parse::ParseError). Only conditions the session
//! cannot recover from end up here.

/// Unrecoverable failures of the interactive session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
    #[error("failed to start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
