//! Error types for capstress

use thiserror::Error;

/// Result type alias for capstress operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for capstress
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Device enumeration failed. Fatal: the dispatch loop cannot continue
    /// without a device list.
    #[error("Device enumeration error: {0}")]
    Enumeration(String),

    /// Opening a capture handle failed. Recoverable: ends only the affected
    /// session, before any reads.
    #[error("Capture open error: {0}")]
    Open(String),

    /// A read on an open capture handle failed. Recoverable: ends only the
    /// affected session's read loop.
    #[error("Capture read error: {0}")]
    Read(String),

    /// A worker could not be launched. Fatal: the pool cannot honor its
    /// slot count.
    #[error("Worker launch error: {0}")]
    Launch(String),

    /// Invalid parameter error
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    /// Create an enumeration error with a custom message
    pub fn enumeration<S: Into<String>>(msg: S) -> Self {
        Error::Enumeration(msg.into())
    }

    /// Create an open error with a custom message
    pub fn open<S: Into<String>>(msg: S) -> Self {
        Error::Open(msg.into())
    }

    /// Create a read error with a custom message
    pub fn read<S: Into<String>>(msg: S) -> Self {
        Error::Read(msg.into())
    }

    /// Create a launch error with a custom message
    pub fn launch<S: Into<String>>(msg: S) -> Self {
        Error::Launch(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
