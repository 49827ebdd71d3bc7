//! Interrupt-driven shutdown
//!
//! The harness is designed to be watched: the interrupt is how the operator
//! asks for the accumulated counters. No cleanup of in-flight sessions is
//! attempted; outstanding capture handles die with the process.

use std::sync::Arc;

use tracing::debug;

use capstress_core::{Console, Error, Result, StressCounters};

/// Install the Ctrl-C handler.
///
/// On interrupt the handler snapshots the counters and hands them to
/// [`Console::report_and_exit`], which prints the report under the console
/// lock and terminates the process with exit code 0.
pub fn install(counters: Arc<StressCounters>, console: Arc<Console>) -> Result<()> {
    ctrlc::set_handler(move || {
        debug!("interrupt received, reporting and exiting");
        console.report_and_exit(&counters.snapshot(), 0);
    })
    .map_err(|e| Error::launch(format!("cannot install interrupt handler: {}", e)))
}
