//! Capstress Core Library
//!
//! This crate provides the fundamental types shared across the capstress
//! workspace: the error taxonomy, the process-wide stress counters, capture
//! configuration, the capture-backend trait seam, and the serialized
//! operator console.

pub mod config;
pub mod console;
pub mod error;
pub mod source;
pub mod stats;
pub mod target;

// Re-export commonly used types
pub use config::{
    CaptureConfig, HarnessConfig, DEFAULT_MAX_READS, DEFAULT_SNAPLEN, DEFAULT_TIMEOUT_MS,
    DEFAULT_WORKERS,
};
pub use console::Console;
pub use error::{Error, Result};
pub use source::{CaptureBackend, PacketSource, ReadEvent};
pub use stats::{StressCounters, StressReport};
pub use target::CaptureTarget;
