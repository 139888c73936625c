//! Error type for the terminal front end

use thiserror::Error;

/// Failure while driving the interactive terminal session
///
/// Everything the event loop does (raw mode, drawing, input polling) is
/// terminal I/O, so the variants mirror that.
#[derive(Debug, Error)]
pub enum UiError {
    /// Raw mode, drawing, or input polling failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the terminal front end
pub type Result<T> = std::result::Result<T, UiError>;
