//! Finder error types

use thiserror::Error;

/// Errors that can occur while running the interactive finder
#[derive(Debug, Error)]
pub enum FinderError {
    /// The controlling terminal could not be opened
    #[error("could not open /dev/tty: {0}")]
    TtyUnavailable(#[source] std::io::Error),

    /// IO error during terminal operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for finder operations
pub type Result<T> = std::result::Result<T, FinderError>;
