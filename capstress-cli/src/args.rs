//! CLI argument parsing

use clap::Parser;

use capstress_core::{HarnessConfig, DEFAULT_MAX_READS, DEFAULT_WORKERS};

#[derive(Parser, Debug)]
#[command(name = "capstress")]
#[command(
    version,
    about = "Stress the packet-capture layer by opening and capturing from multiple adapters at the same time",
    long_about = None
)]
pub struct Cli {
    /// Number of concurrent worker slots
    #[arg(value_name = "WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Only stress adapters whose name contains this substring
    #[arg(value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Upper bound (exclusive) for the randomized per-session read budget
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_READS)]
    pub max_reads: u32,

    /// List capture devices and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the harness configuration from the parsed arguments
    pub fn to_config(&self) -> HarnessConfig {
        HarnessConfig {
            workers: self.workers,
            filter: self.filter.clone(),
            max_reads: self.max_reads,
            ..Default::default()
        }
    }
}
