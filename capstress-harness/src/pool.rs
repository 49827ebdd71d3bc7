//! Fixed-size worker slot pool

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};
use uuid::Uuid;

use capstress_core::{
    CaptureBackend, CaptureTarget, Console, Error, HarnessConfig, Result, StressCounters,
};
use capstress_capture::CaptureSession;

/// Bookkeeping for one in-flight session
struct SessionHandle {
    id: Uuid,
    device: String,
    /// Set by the worker thread as its last act
    done: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

/// Fixed table of worker slots, each holding at most one in-flight session
///
/// The pool is owned by the dispatch thread. Sessions signal completion
/// through their done flag, so [`SlotPool::is_free`] never blocks and a
/// busy slot is always skipped, never preempted. The pool never touches a
/// capture handle; each session closes its own before raising its flag.
pub struct SlotPool {
    slots: Vec<Option<SessionHandle>>,
    backend: Arc<dyn CaptureBackend>,
    config: HarnessConfig,
    counters: Arc<StressCounters>,
    console: Arc<Console>,
}

impl SlotPool {
    /// Create a pool with `config.workers` slots
    pub fn new(
        backend: Arc<dyn CaptureBackend>,
        config: HarnessConfig,
        counters: Arc<StressCounters>,
        console: Arc<Console>,
    ) -> Result<Self> {
        if config.workers == 0 {
            return Err(Error::invalid_parameter(
                "workers",
                "worker count must be at least 1",
            ));
        }

        let mut slots = Vec::with_capacity(config.workers);
        slots.resize_with(config.workers, || None);

        debug!(workers = config.workers, "slot pool created");

        Ok(Self {
            slots,
            backend,
            config,
            counters,
            console,
        })
    }

    /// Number of worker slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Non-blocking check whether the slot can take a new session
    pub fn is_free(&self, index: usize) -> bool {
        match &self.slots[index] {
            None => true,
            Some(handle) => handle.done.load(Ordering::Acquire),
        }
    }

    /// Number of slots with a session still running
    pub fn active_count(&self) -> usize {
        (0..self.slots.len()).filter(|&i| !self.is_free(i)).count()
    }

    /// Launch a new session on `index`, which must currently be free.
    ///
    /// Any finished prior handle is reaped first. The new session runs on
    /// its own worker thread; the pool records only the completion flag and
    /// join handle for future polls.
    pub fn assign(&mut self, index: usize, target: CaptureTarget) -> Result<Uuid> {
        debug_assert!(self.is_free(index), "assign on a busy slot");

        if let Some(old) = self.slots[index].take() {
            trace!(slot = index, id = %old.id, device = %old.device, "reaping finished session");
            if let Some(handle) = old.thread {
                // the done flag is already up, so the thread is exiting and
                // the join returns almost immediately
                let _ = handle.join();
            }
        }

        let session = CaptureSession::new(
            target.clone(),
            self.config.capture.clone(),
            self.config.max_reads,
            Arc::clone(&self.backend),
            Arc::clone(&self.counters),
            Arc::clone(&self.console),
        );
        let id = session.id();

        let done = Arc::new(AtomicBool::new(false));
        let session_done = Arc::clone(&done);

        let thread = thread::Builder::new()
            .name(format!("capstress-{}", index))
            .spawn(move || {
                session.run();
                session_done.store(true, Ordering::Release);
            })
            .map_err(|e| Error::launch(format!("cannot spawn worker thread: {}", e)))?;

        debug!(slot = index, id = %id, device = %target.name, "session launched");

        self.slots[index] = Some(SessionHandle {
            id,
            device: target.name,
            done,
            thread: Some(thread),
        });

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{wait_until, MockBackend};

    fn pool_with(backend: &Arc<MockBackend>, workers: usize) -> Result<SlotPool> {
        let config = HarnessConfig {
            workers,
            max_reads: 1,
            ..Default::default()
        };
        SlotPool::new(
            Arc::clone(backend) as Arc<dyn CaptureBackend>,
            config,
            Arc::new(StressCounters::new()),
            Arc::new(Console::new()),
        )
    }

    #[test]
    fn test_zero_workers_rejected() {
        let backend = MockBackend::with_devices(&["mock0"]);
        let result = pool_with(&backend, 0);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_fresh_pool_is_all_free() {
        let backend = MockBackend::with_devices(&["mock0"]);
        let pool = pool_with(&backend, 4).unwrap();

        assert_eq!(pool.capacity(), 4);
        for i in 0..4 {
            assert!(pool.is_free(i));
        }
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_busy_slot_is_not_free() {
        let backend = MockBackend::with_devices(&["mock0"]);
        backend.hold_open(true);
        let mut pool = pool_with(&backend, 2).unwrap();

        pool.assign(0, CaptureTarget::new("mock0")).unwrap();
        assert!(!pool.is_free(0));
        assert!(pool.is_free(1));
        assert_eq!(pool.active_count(), 1);

        backend.hold_open(false);
        wait_until(|| pool.is_free(0));
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_slot_reuse_reaps_finished_session() {
        let backend = MockBackend::with_devices(&["mock0"]);
        let mut pool = pool_with(&backend, 1).unwrap();

        for _ in 0..50 {
            wait_until(|| pool.is_free(0));
            pool.assign(0, CaptureTarget::new("mock0")).unwrap();
        }
        wait_until(|| pool.is_free(0));

        // every session opened and closed its own handle exactly once, and
        // no two of them ever overlapped on the single slot
        wait_until(|| backend.stats.closes() == 50);
        assert_eq!(backend.stats.opens(), 50);
        assert_eq!(backend.stats.max_live(), 1);
    }

    #[test]
    fn test_pool_bound_holds_under_churn() {
        let backend = MockBackend::with_devices(&["mock0"]);
        backend.hold_open(true);
        let mut pool = pool_with(&backend, 4).unwrap();

        for i in 0..4 {
            pool.assign(i, CaptureTarget::new("mock0")).unwrap();
        }
        assert_eq!(pool.active_count(), 4);
        for i in 0..4 {
            assert!(!pool.is_free(i));
        }

        backend.hold_open(false);
        wait_until(|| pool.active_count() == 0);

        wait_until(|| backend.stats.closes() == 4);
        assert!(backend.stats.max_live() <= 4);
    }
}
