//! Capture session lifecycle
//!
//! A session is one open/read/close cycle against a single device: open a
//! capture handle, perform a randomized bounded number of reads, close the
//! handle. Outcomes land in the shared counters; error lines go to the
//! serialized console.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use capstress_core::{
    CaptureBackend, CaptureConfig, CaptureTarget, Console, PacketSource, ReadEvent, StressCounters,
};

/// One open/read-loop/close cycle against a single capture device
///
/// The session owns its capture handle for its whole lifetime; the handle
/// is closed by drop when the read loop ends, whether the budget ran out
/// or a read failed.
pub struct CaptureSession {
    /// Session ID (UUID v7 for time-ordered tracking)
    id: Uuid,
    target: CaptureTarget,
    config: CaptureConfig,
    max_reads: u32,
    backend: Arc<dyn CaptureBackend>,
    counters: Arc<StressCounters>,
    console: Arc<Console>,
}

impl CaptureSession {
    /// Create a session bound to one capture target
    pub fn new(
        target: CaptureTarget,
        config: CaptureConfig,
        max_reads: u32,
        backend: Arc<dyn CaptureBackend>,
        counters: Arc<StressCounters>,
        console: Arc<Console>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            target,
            config,
            max_reads,
            backend,
            counters,
            console,
        }
    }

    /// Get the session ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Run the session to completion.
    ///
    /// On open failure the open-error counter is bumped, the error is
    /// reported, and no reads are attempted.
    pub fn run(self) {
        let source = match self.backend.open(&self.target, &self.config) {
            Ok(source) => source,
            Err(e) => {
                self.counters.record_open_error();
                self.console
                    .error(&format!("Error opening adapter {}: {}", self.target.name, e));
                return;
            }
        };

        let budget = draw_budget(self.max_reads);
        debug!(id = %self.id, device = %self.target.name, budget, "session opened");

        self.read_loop(source, budget);
    }

    /// Perform up to `budget` reads, then drop the source.
    ///
    /// A packet or a timeout keeps the loop going; a read error ends it
    /// immediately. Either way the handle closes exactly once, here.
    fn read_loop(&self, mut source: Box<dyn PacketSource>, budget: u32) {
        for _ in 0..budget {
            match source.next_event() {
                Ok(ReadEvent::Packet(_)) => self.counters.record_packet(),
                Ok(ReadEvent::Timeout) => self.counters.record_timeout(),
                Err(e) => {
                    self.counters.record_read_error();
                    self.console
                        .error(&format!("Read error on {}: {}", self.target.name, e));
                    break;
                }
            }
        }

        debug!(id = %self.id, device = %self.target.name, "session finished");
    }
}

/// Uniform draw from `[0, max_reads)`; a bound of 0 yields no reads
fn draw_budget(max_reads: u32) -> u32 {
    if max_reads == 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..max_reads)
}
