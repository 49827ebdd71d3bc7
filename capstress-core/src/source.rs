//! Capture backend abstraction
//!
//! The dispatch loop and capture sessions talk to the capture layer through
//! these traits, so the scheduling core can be exercised against test
//! backends without capture privileges.

use crate::{CaptureConfig, CaptureTarget, Result};

/// Outcome of one read attempt on an open capture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadEvent {
    /// A packet arrived; carries the captured length in bytes
    Packet(usize),
    /// The read timeout elapsed without a packet
    Timeout,
}

/// An open capture handle
///
/// Dropping the source closes the handle; sessions own their source for
/// their whole lifetime, so every handle is closed exactly once.
pub trait PacketSource: Send {
    /// Attempt to read the next packet, blocking at most the configured
    /// read timeout
    fn next_event(&mut self) -> Result<ReadEvent>;
}

/// The device-facing side of the capture layer
pub trait CaptureBackend: Send + Sync {
    /// List the capture devices currently available
    fn enumerate(&self) -> Result<Vec<CaptureTarget>>;

    /// Open a capture handle on one device
    fn open(&self, target: &CaptureTarget, config: &CaptureConfig)
        -> Result<Box<dyn PacketSource>>;
}
