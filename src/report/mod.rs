use std::net::Ipv4Addr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::detector::Alert;
use crate::tracker::BindingTracker;

#[cfg(test)]
mod tests;

/// One observed host: an IP and every MAC seen claiming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    pub ip: Ipv4Addr,
    pub macs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub unique_ips: usize,
    pub hosts_observed: Vec<HostRecord>,
    pub gratuitous_count: u64,
}

/// The complete run report, printed as the program's sole stdout output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub ts: u64,
    pub summary: Summary,
    pub alerts: Vec<Alert>,
}

/// Shapes the final report from the tracker state and the alert list.
/// Read-only over the tracker; the alerts pass through unchanged.
pub fn build(tracker: &BindingTracker, alerts: Vec<Alert>) -> Report {
    let hosts_observed: Vec<HostRecord> = tracker
        .bindings()
        .iter()
        .map(|(ip, macs)| HostRecord {
            ip: *ip,
            macs: macs.iter().map(ToString::to_string).collect(),
        })
        .collect();

    Report {
        ts: unix_timestamp(),
        summary: Summary {
            unique_ips: tracker.bindings().len(),
            hosts_observed,
            gratuitous_count: tracker.gratuitous_count(),
        },
        alerts,
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
