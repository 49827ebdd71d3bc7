//! Process-wide stress counters
//!
//! One counter bundle is shared by the dispatch loop and every capture
//! session. Mutation goes through `record_*` methods on atomics; readers
//! take a [`StressReport`] snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of the harness counters at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StressReport {
    /// Sessions dispatched to a slot
    pub dispatched: u64,
    /// Packets captured across all sessions
    pub packets: u64,
    /// Read attempts that elapsed without a packet
    pub timeouts: u64,
    /// Capture handles that failed to open
    pub open_errors: u64,
    /// Read loops terminated by a fatal read error
    pub read_errors: u64,
    /// Device enumeration failures
    pub enumeration_errors: u64,
}

impl StressReport {
    /// Format the report as the operator-facing summary
    pub fn format(&self) -> String {
        format!(
            "Number of iterations:\t\t{}\n\
             Number of packets captured:\t{}\n\
             Number of read timeouts:\t{}\n\
             Number of open errors:\t\t{}\n\
             Number of read errors:\t\t{}\n\
             Number of enumeration errors:\t{}",
            self.dispatched,
            self.packets,
            self.timeouts,
            self.open_errors,
            self.read_errors,
            self.enumeration_errors
        )
    }
}

/// Thread-safe counter bundle shared by all sessions and the dispatch loop
#[derive(Debug, Default)]
pub struct StressCounters {
    dispatched: AtomicU64,
    packets: AtomicU64,
    timeouts: AtomicU64,
    open_errors: AtomicU64,
    read_errors: AtomicU64,
    enumeration_errors: AtomicU64,
}

impl StressCounters {
    /// Create a new counter bundle with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session handed to a slot
    pub fn record_dispatch(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a captured packet
    pub fn record_packet(&self) {
        self.packets.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a read attempt that timed out
    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed capture open
    pub fn record_open_error(&self) {
        self.open_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fatal read error
    pub fn record_read_error(&self) {
        self.read_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a device enumeration failure
    pub fn record_enumeration_error(&self) {
        self.enumeration_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the dispatched-session count
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    /// Get the captured-packet count
    pub fn packets(&self) -> u64 {
        self.packets.load(Ordering::Relaxed)
    }

    /// Get the read-timeout count
    pub fn timeouts(&self) -> u64 {
        self.timeouts.load(Ordering::Relaxed)
    }

    /// Get the open-error count
    pub fn open_errors(&self) -> u64 {
        self.open_errors.load(Ordering::Relaxed)
    }

    /// Get the read-error count
    pub fn read_errors(&self) -> u64 {
        self.read_errors.load(Ordering::Relaxed)
    }

    /// Get the enumeration-error count
    pub fn enumeration_errors(&self) -> u64 {
        self.enumeration_errors.load(Ordering::Relaxed)
    }

    /// Get a consistent-enough snapshot of all counters
    pub fn snapshot(&self) -> StressReport {
        StressReport {
            dispatched: self.dispatched(),
            packets: self.packets(),
            timeouts: self.timeouts(),
            open_errors: self.open_errors(),
            read_errors: self.read_errors(),
            enumeration_errors: self.enumeration_errors(),
        }
    }
}
