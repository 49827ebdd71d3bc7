//! capstress: stress harness for the packet-capture layer
//!
//! Repeatedly opens capture handles on the matching adapters, performs a
//! randomized bounded number of reads on each, closes the handle, and keeps
//! the worker slots churning until interrupted. Ctrl-C prints the
//! accumulated counters and exits.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use capstress_capture::{interface_state, PcapBackend};
use capstress_cli::Cli;
use capstress_core::{CaptureBackend, Console, StressCounters};
use capstress_harness::{shutdown, DispatchLoop, SlotPool};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse_args();

    let backend: Arc<dyn CaptureBackend> = Arc::new(PcapBackend::new());

    if cli.list {
        list_devices(backend.as_ref());
        return;
    }

    let config = cli.to_config();
    let counters = Arc::new(StressCounters::new());
    let console = Arc::new(Console::new());

    if let Err(e) = shutdown::install(Arc::clone(&counters), Arc::clone(&console)) {
        console.error(&e.to_string());
        std::process::exit(1);
    }

    let pool = match SlotPool::new(
        Arc::clone(&backend),
        config.clone(),
        Arc::clone(&counters),
        Arc::clone(&console),
    ) {
        Ok(pool) => pool,
        Err(e) => {
            console.error(&e.to_string());
            std::process::exit(1);
        }
    };

    tracing::info!(
        workers = config.workers,
        filter = config.filter.as_deref().unwrap_or("<none>"),
        max_reads = config.max_reads,
        "capstress starting"
    );

    let mut dispatch = DispatchLoop::new(
        pool,
        backend,
        config.filter,
        Arc::clone(&counters),
        Arc::clone(&console),
    );

    // run() only returns on a fatal error; report what was accumulated
    // before dying, then exit nonzero
    if let Err(e) = dispatch.run() {
        console.error(&e.to_string());
        console.report_and_exit(&counters.snapshot(), 1);
    }
}

/// Print the enumerated capture devices, annotated with OS interface state
/// where the names line up
fn list_devices(backend: &dyn CaptureBackend) {
    let targets = match backend.enumerate() {
        Ok(targets) => targets,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if targets.is_empty() {
        println!("No capture devices found. Are you running with sufficient privileges?");
        return;
    }

    for target in targets {
        println!("{}", target);
        if let Some(state) = interface_state(&target.name) {
            if let Some(ref mac) = state.mac {
                println!("    MAC: {}", mac);
            }
            for ip in &state.ips {
                println!("    IP: {}", ip);
            }
            println!(
                "    Up: {}, Loopback: {}",
                state.is_up, state.is_loopback
            );
        }
    }
}
