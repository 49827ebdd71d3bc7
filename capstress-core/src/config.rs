//! Capture and harness configuration

/// Default snapshot length (maximum bytes per packet)
pub const DEFAULT_SNAPLEN: i32 = 65535;

/// Default read timeout (milliseconds). Kept short so a session never waits
/// long on a quiet adapter.
pub const DEFAULT_TIMEOUT_MS: i32 = 1;

/// Default number of worker slots
pub const DEFAULT_WORKERS: usize = 16;

/// Default upper bound for the randomized per-session read budget
pub const DEFAULT_MAX_READS: u32 = 500;

/// Configuration for one capture handle
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per packet
    pub snaplen: i32,
    /// Read timeout in milliseconds
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
        }
    }
}

/// Configuration for one harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Number of worker slots; must be at least 1
    pub workers: usize,
    /// Only devices whose name contains this substring are stressed
    pub filter: Option<String>,
    /// Upper bound (exclusive) for the randomized per-session read budget;
    /// 0 means sessions never read
    pub max_reads: u32,
    /// Capture handle configuration shared by all sessions
    pub capture: CaptureConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            filter: None,
            max_reads: DEFAULT_MAX_READS,
            capture: CaptureConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_config_default() {
        let config = CaptureConfig::default();
        assert_eq!(config.snaplen, DEFAULT_SNAPLEN);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.promiscuous);
    }

    #[test]
    fn test_harness_config_default() {
        let config = HarnessConfig::default();
        assert_eq!(config.workers, 16);
        assert_eq!(config.max_reads, 500);
        assert!(config.filter.is_none());
    }
}
