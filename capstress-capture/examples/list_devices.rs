//! Example: List capture devices with interface state
//!
//! Run with: cargo run --example list_devices

use capstress_capture::{interface_state, PcapBackend};
use capstress_core::CaptureBackend;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let backend = PcapBackend::new();

    println!("=== Capture Devices ===\n");

    for target in backend.enumerate()? {
        println!("{}", target);

        if let Some(state) = interface_state(&target.name) {
            if let Some(ref mac) = state.mac {
                println!("  MAC: {}", mac);
            }
            for ip in &state.ips {
                println!("  IP: {}", ip);
            }
            println!("  Up: {}, Loopback: {}", state.is_up, state.is_loopback);
        }

        println!();
    }

    Ok(())
}
