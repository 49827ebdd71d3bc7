//! Capture target identifiers

use std::fmt;

/// One capture device as produced by enumeration
///
/// Targets are valid for a single enumeration pass; the dispatch loop
/// re-enumerates before every pass rather than caching them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    /// Device name understood by the capture layer
    pub name: String,
    /// Human-readable description, if the capture layer provides one
    pub description: Option<String>,
}

impl CaptureTarget {
    /// Create a target from a device name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a human-readable description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case-sensitive substring match against the device name.
    /// No filter matches every target.
    pub fn matches(&self, filter: Option<&str>) -> bool {
        match filter {
            None => true,
            Some(substring) => self.name.contains(substring),
        }
    }
}

impl fmt::Display for CaptureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({})", self.name, description),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_matches_everything() {
        let target = CaptureTarget::new("eth0");
        assert!(target.matches(None));
    }

    #[test]
    fn test_substring_filter() {
        let target = CaptureTarget::new("\\Device\\NPF_{ABC}");
        assert!(target.matches(Some("\\Device\\NPF_{")));
        assert!(target.matches(Some("NPF")));
        assert!(!target.matches(Some("eth")));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let target = CaptureTarget::new("eth0");
        assert!(target.matches(Some("eth")));
        assert!(!target.matches(Some("ETH")));
    }

    #[test]
    fn test_empty_filter_matches() {
        let target = CaptureTarget::new("eth0");
        assert!(target.matches(Some("")));
    }

    #[test]
    fn test_display() {
        let plain = CaptureTarget::new("eth0");
        assert_eq!(plain.to_string(), "eth0");

        let described = CaptureTarget::new("eth0").with_description("wired");
        assert_eq!(described.to_string(), "eth0 (wired)");
    }
}
