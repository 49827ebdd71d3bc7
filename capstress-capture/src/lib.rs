//! Capture layer for capstress
//!
//! This crate provides the pcap-facing half of the harness:
//!
//! - **Device enumeration**: list the capture devices pcap knows about
//! - **Capture sessions**: the open / bounded-read-loop / close lifecycle
//! - **Interface descriptions**: OS-level interface state for the device
//!   listing mode
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use capstress_capture::{CaptureSession, PcapBackend};
//! use capstress_core::{CaptureBackend, CaptureConfig, Console, StressCounters};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend: Arc<dyn CaptureBackend> = Arc::new(PcapBackend::new());
//! let target = backend.enumerate()?.into_iter().next().expect("no devices");
//!
//! let counters = Arc::new(StressCounters::new());
//! let console = Arc::new(Console::new());
//! let session = CaptureSession::new(
//!     target,
//!     CaptureConfig::default(),
//!     100,
//!     backend,
//!     Arc::clone(&counters),
//!     console,
//! );
//! session.run();
//! println!("{}", counters.snapshot().format());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod interface;
pub mod session;

// Re-export main types
pub use backend::PcapBackend;
pub use interface::{interface_state, list_interfaces, InterfaceInfo};
pub use session::CaptureSession;
