//! Dispatch loop
//!
//! Enumerates capture devices, filters them by substring, and feeds each
//! match to the next free worker slot, forever. A busy slot skips the
//! target; the target is not retried until the next enumeration pass.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::trace;

use capstress_core::{CaptureBackend, Console, Result, StressCounters};

use crate::pool::SlotPool;

/// Sleep between passes that assigned nothing, so an empty match set or a
/// fully busy pool does not spin the enumeration loop flat out
const IDLE_BACKOFF: Duration = Duration::from_millis(10);

/// Feeds enumerated capture targets to pool slots
pub struct DispatchLoop {
    pool: SlotPool,
    backend: Arc<dyn CaptureBackend>,
    filter: Option<String>,
    counters: Arc<StressCounters>,
    console: Arc<Console>,
    /// Next-slot cursor, wrapping over `[0, capacity)`
    cursor: usize,
}

impl DispatchLoop {
    /// Create a dispatch loop over an existing pool
    pub fn new(
        pool: SlotPool,
        backend: Arc<dyn CaptureBackend>,
        filter: Option<String>,
        counters: Arc<StressCounters>,
        console: Arc<Console>,
    ) -> Self {
        Self {
            pool,
            backend,
            filter,
            counters,
            console,
            cursor: 0,
        }
    }

    /// The pool being fed
    pub fn pool(&self) -> &SlotPool {
        &self.pool
    }

    /// One enumeration pass. Returns how many sessions were assigned.
    ///
    /// Each matching target is offered to the slot under the cursor exactly
    /// once; if that slot is busy, the cursor advances and the target is
    /// dropped for this pass. Enumeration failure is fatal and bubbles up
    /// after being counted.
    pub fn pass(&mut self) -> Result<usize> {
        let targets = match self.backend.enumerate() {
            Ok(targets) => targets,
            Err(e) => {
                self.counters.record_enumeration_error();
                return Err(e);
            }
        };

        let mut assigned = 0;
        for target in targets {
            if !target.matches(self.filter.as_deref()) {
                continue;
            }

            if self.cursor == self.pool.capacity() {
                self.cursor = 0;
            }

            if !self.pool.is_free(self.cursor) {
                trace!(slot = self.cursor, device = %target.name, "slot busy, skipping target");
                self.cursor += 1;
                continue;
            }

            self.console.assignment(self.cursor, &target.name);
            self.pool.assign(self.cursor, target)?;
            self.counters.record_dispatch();
            self.cursor += 1;
            assigned += 1;
        }

        Ok(assigned)
    }

    /// Run passes until a fatal error.
    ///
    /// Only an enumeration or worker-launch failure makes this return; a
    /// quiet pass just backs off briefly before re-enumerating.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.pass()? == 0 {
                thread::sleep(IDLE_BACKOFF);
            }
        }
    }
}
