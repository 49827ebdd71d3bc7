//! Serialized operator console
//!
//! Assignment lines, session error lines and the final counter report are
//! written by different threads; one lock keeps them from interleaving.

use parking_lot::Mutex;

use crate::stats::StressReport;

/// Serialized writer for operator-facing output
#[derive(Debug, Default)]
pub struct Console {
    lock: Mutex<()>,
}

impl Console {
    /// Create a new console
    pub fn new() -> Self {
        Self::default()
    }

    /// Print one slot assignment line
    pub fn assignment(&self, slot: usize, target: &str) {
        let _guard = self.lock.lock();
        println!("slot {}: {}", slot, target);
    }

    /// Print one error line
    pub fn error(&self, message: &str) {
        let _guard = self.lock.lock();
        eprintln!("{}", message);
    }

    /// Print the final counter report and terminate the process.
    ///
    /// The console lock is held until exit, so no other writer can
    /// interleave with the report once it has started.
    pub fn report_and_exit(&self, report: &StressReport, code: i32) -> ! {
        let _guard = self.lock.lock();
        println!();
        println!("{}", report.format());
        std::process::exit(code);
    }
}
