use thiserror::Error;

/// Dfm specific error types
#[derive(Error, Debug)]
pub enum FmError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub type FmResult<T> = std::result::Result<T, FmError>;

/// Severity of a message shown in the file manager's notification area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Bad,
}
