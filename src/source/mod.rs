use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::record::{decode_frame, ArpRecord};

/// How a run obtains its ARP observations. Built once from the command
/// line and passed in whole; the collectors hold no other configuration.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub pcap_path: Option<PathBuf>,
    pub live: bool,
    pub interface: Option<String>,
    pub timeout: Duration,
}

/// Collects the run's ARP records from the configured source.
///
/// With neither a capture file nor live mode configured, returns no records;
/// downstream stages turn that into a valid empty report.
pub fn collect_records(config: &CaptureConfig) -> Result<Vec<ArpRecord>> {
    if let Some(path) = &config.pcap_path {
        return replay_capture(path);
    }
    if config.live {
        return sniff_live(config);
    }
    warn!("no capture source configured, producing an empty report");
    Ok(Vec::new())
}

/// Replays a stored capture file, decoding every ARP frame it holds.
fn replay_capture(path: &Path) -> Result<Vec<ArpRecord>> {
    let mut capture = pcap::Capture::from_file(path)
        .with_context(|| format!("failed to open capture file {}", path.display()))?;

    let mut frames: u64 = 0;
    let mut records = Vec::new();
    while let Ok(packet) = capture.next_packet() {
        frames += 1;
        if let Some(record) = decode_frame(packet.data) {
            records.push(record);
        }
    }

    info!(
        frames,
        arp_records = records.len(),
        path = %path.display(),
        "replayed capture file"
    );
    Ok(records)
}

/// Samples live ARP traffic from an interface until the session deadline.
///
/// Reaching the deadline is the normal way a live session ends; whatever
/// was decoded up to that point is the run's record set.
fn sniff_live(config: &CaptureConfig) -> Result<Vec<ArpRecord>> {
    let interface = match &config.interface {
        Some(name) => name.clone(),
        None => default_interface_name()
            .context("could not find a suitable network interface")?,
    };

    let device = pcap::Device::list()
        .context("failed to enumerate capture devices")?
        .into_iter()
        .find(|dev| dev.name == interface)
        .with_context(|| format!("no such capture device: {interface}"))?;

    let mut capture = pcap::Capture::from_device(device)
        .with_context(|| format!("failed to open device {interface}"))?
        .promisc(true)
        .timeout(1000) // keep reads from blocking past the deadline
        .open()
        .with_context(|| format!("failed to activate capture on {interface}"))?;
    capture
        .filter("arp", true)
        .context("failed to install ARP capture filter")?;

    info!(
        interface,
        timeout_secs = config.timeout.as_secs(),
        "sampling live ARP traffic"
    );

    let deadline = Instant::now() + config.timeout;
    let mut records = Vec::new();
    while Instant::now() < deadline {
        match capture.next_packet() {
            Ok(packet) => {
                if let Some(record) = decode_frame(packet.data) {
                    records.push(record);
                }
            }
            // An idle wire inside the window is expected, keep waiting.
            Err(pcap::Error::TimeoutExpired) => {}
            Err(e) => return Err(e).context("error while reading from live capture"),
        }
    }

    info!(arp_records = records.len(), "live sampling window elapsed");
    Ok(records)
}

/// First non-loopback interface, used when none is named on the command line.
fn default_interface_name() -> Option<String> {
    pnet_datalink::interfaces()
        .into_iter()
        .find(|iface| !iface.is_loopback())
        .map(|iface| iface.name)
}
