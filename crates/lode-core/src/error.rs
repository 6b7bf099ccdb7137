//! Error types for LodeKV
//!
//! Absence of a key is never represented here: point reads return
//! `Ok(None)` and the raw API surfaces `not_found` as a response field.

use thiserror::Error;

/// The main error type for LodeKV operations
#[derive(Error, Debug)]
pub enum Error {
    // ========== Engine Errors ==========
    /// The backing engine failed to open a snapshot, commit a write, or
    /// advance an iterator.
    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Unknown column family: {0}")]
    UnknownColumnFamily(String),

    #[error("Storage engine is stopped")]
    Stopped,

    // ========== IO Errors ==========
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========== Configuration Errors ==========
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for LodeKV operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if the operation may succeed when retried against a
    /// running engine, i.e. the failure was not a lifecycle fault.
    pub fn is_engine_fault(&self) -> bool {
        matches!(self, Error::Engine(_) | Error::UnknownColumnFamily(_))
    }
}
