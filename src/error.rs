//! Interpreter errors

use std::path::PathBuf;

use thiserror::Error;

/// Interpreter result type
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions. Everything else a program can do is defined behaviour.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
