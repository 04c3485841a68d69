//! Common error types for tracknest

use thiserror::Error;

/// Common result type for tracknest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared between the library and file stores
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library document exists but is not valid JSON
    #[error("Library store corrupt: {0}")]
    StoreCorrupt(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
