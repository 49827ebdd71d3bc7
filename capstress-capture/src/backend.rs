//! Live pcap capture backend

use pcap::{Active, Capture, Device};
use tracing::debug;

use capstress_core::{
    CaptureBackend, CaptureConfig, CaptureTarget, Error, PacketSource, ReadEvent, Result,
};

/// Capture backend that talks to the real pcap layer
#[derive(Debug, Clone, Copy, Default)]
pub struct PcapBackend;

impl PcapBackend {
    /// Create a new pcap backend
    pub fn new() -> Self {
        Self
    }
}

impl CaptureBackend for PcapBackend {
    fn enumerate(&self) -> Result<Vec<CaptureTarget>> {
        let devices = Device::list().map_err(|e| Error::enumeration(e.to_string()))?;
        debug!(count = devices.len(), "enumerated capture devices");

        Ok(devices
            .into_iter()
            .map(|device| {
                let target = CaptureTarget::new(device.name);
                match device.desc {
                    Some(desc) => target.with_description(desc),
                    None => target,
                }
            })
            .collect())
    }

    fn open(
        &self,
        target: &CaptureTarget,
        config: &CaptureConfig,
    ) -> Result<Box<dyn PacketSource>> {
        debug!(device = %target.name, "opening capture handle");

        let device = Device::from(target.name.as_str());
        let capture = Capture::from_device(device)
            .map_err(|e| Error::open(e.to_string()))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .open()
            .map_err(|e| Error::open(e.to_string()))?;

        Ok(Box::new(PcapSource { capture }))
    }
}

/// One open pcap handle; the handle closes when this is dropped
struct PcapSource {
    capture: Capture<Active>,
}

impl PacketSource for PcapSource {
    fn next_event(&mut self) -> Result<ReadEvent> {
        match self.capture.next_packet() {
            Ok(packet) => Ok(ReadEvent::Packet(packet.data.len())),
            Err(pcap::Error::TimeoutExpired) => Ok(ReadEvent::Timeout),
            Err(e) => Err(Error::read(e.to_string())),
        }
    }
}
