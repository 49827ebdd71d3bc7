//! Example: Run one capture session against the first available device
//!
//! Note: Requires root/administrator privileges to run.
//!
//! Run with: sudo cargo run --example single_session

use std::sync::Arc;

use capstress_capture::{CaptureSession, PcapBackend};
use capstress_core::{CaptureBackend, CaptureConfig, Console, StressCounters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let backend: Arc<dyn CaptureBackend> = Arc::new(PcapBackend::new());

    let target = backend
        .enumerate()?
        .into_iter()
        .next()
        .ok_or("no capture devices found")?;
    println!("Capturing on: {}", target);

    let counters = Arc::new(StressCounters::new());
    let console = Arc::new(Console::new());

    // one session with a read budget drawn from [0, 100)
    let session = CaptureSession::new(
        target,
        CaptureConfig::default(),
        100,
        backend,
        Arc::clone(&counters),
        console,
    );
    session.run();

    println!("\n=== Session Outcome ===");
    println!("{}", counters.snapshot().format());

    Ok(())
}
