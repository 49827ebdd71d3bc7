//! Test doubles for the scheduling core
//!
//! A scriptable in-memory capture backend so the pool and dispatch loop can
//! be exercised without capture privileges.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use capstress_core::{
    CaptureBackend, CaptureConfig, CaptureTarget, Error, PacketSource, ReadEvent, Result,
};

/// Spin until `condition` holds, panicking after a generous deadline
pub fn wait_until<F: Fn() -> bool>(condition: F) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        if Instant::now() > deadline {
            panic!("condition not met within deadline");
        }
        thread::sleep(Duration::from_millis(1));
    }
}

/// Observations shared between a backend and the sources it handed out
#[derive(Default)]
pub struct MockStats {
    opens: AtomicUsize,
    closes: AtomicUsize,
    live: AtomicUsize,
    max_live: AtomicUsize,
    open_devices: Mutex<Vec<String>>,
}

impl MockStats {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneously open handles observed
    pub fn max_live(&self) -> usize {
        self.max_live.load(Ordering::SeqCst)
    }

    /// Device names passed to `open`, in order
    pub fn open_devices(&self) -> Vec<String> {
        self.open_devices.lock().clone()
    }
}

/// In-memory capture backend with scriptable failure modes
pub struct MockBackend {
    devices: Mutex<Vec<CaptureTarget>>,
    fail_enumerate: AtomicBool,
    fail_open: AtomicBool,
    hold_open: AtomicBool,
    pub stats: Arc<MockStats>,
}

impl MockBackend {
    pub fn with_devices(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            devices: Mutex::new(names.iter().copied().map(CaptureTarget::new).collect()),
            fail_enumerate: AtomicBool::new(false),
            fail_open: AtomicBool::new(false),
            hold_open: AtomicBool::new(false),
            stats: Arc::new(MockStats::default()),
        })
    }

    pub fn fail_enumerate(&self, fail: bool) {
        self.fail_enumerate.store(fail, Ordering::SeqCst);
    }

    pub fn fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::SeqCst);
    }

    /// While held, `open` calls park until released, keeping their sessions
    /// visibly in flight
    pub fn hold_open(&self, hold: bool) {
        self.hold_open.store(hold, Ordering::SeqCst);
    }
}

impl CaptureBackend for MockBackend {
    fn enumerate(&self) -> Result<Vec<CaptureTarget>> {
        if self.fail_enumerate.load(Ordering::SeqCst) {
            return Err(Error::enumeration("mock enumeration failure"));
        }
        Ok(self.devices.lock().clone())
    }

    fn open(
        &self,
        target: &CaptureTarget,
        _config: &CaptureConfig,
    ) -> Result<Box<dyn PacketSource>> {
        while self.hold_open.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(1));
        }

        if self.fail_open.load(Ordering::SeqCst) {
            return Err(Error::open("mock open failure"));
        }

        self.stats.open_devices.lock().push(target.name.clone());
        self.stats.opens.fetch_add(1, Ordering::SeqCst);
        let live = self.stats.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.max_live.fetch_max(live, Ordering::SeqCst);

        Ok(Box::new(MockSource {
            stats: Arc::clone(&self.stats),
        }))
    }
}

/// Source that always times out; drop is the close
struct MockSource {
    stats: Arc<MockStats>,
}

impl PacketSource for MockSource {
    fn next_event(&mut self) -> Result<ReadEvent> {
        Ok(ReadEvent::Timeout)
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        self.stats.live.fetch_sub(1, Ordering::SeqCst);
        self.stats.closes.fetch_add(1, Ordering::SeqCst);
    }
}
