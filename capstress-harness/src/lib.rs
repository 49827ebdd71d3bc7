//! Worker-slot scheduling for capstress
//!
//! This crate is the core of the harness:
//!
//! - [`SlotPool`]: a fixed table of worker slots, each holding at most one
//!   in-flight capture session, with a non-blocking completion poll
//! - [`DispatchLoop`]: the infinite enumerate → filter → assign cycle that
//!   keeps the pool fed
//! - [`shutdown`]: the interrupt-driven report-and-exit path

pub mod dispatch;
pub mod pool;
pub mod shutdown;

#[cfg(test)]
mod testutil;

pub use dispatch::DispatchLoop;
pub use pool::SlotPool;
