//! CLI interface for capstress
//!
//! This crate provides the command-line surface of the harness: argument
//! parsing and the `capstress` binary.

pub mod args;

pub use args::Cli;
