//! Error types for console interaction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    /// Reading from or writing to the console failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while a choice or answer was expected
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, MenuError>;
