use std::net::Ipv4Addr;

use serde::Serialize;
use tracing::warn;

use crate::tracker::BindingTable;


/// Gratuitous announcements above this count trigger an alert.
/// Strict comparison: a run with exactly this many stays silent.
pub const GRATUITOUS_ARP_THRESHOLD: u64 = 10;

/// A detection finding, serialized with a `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Alert {
    #[serde(rename = "INCONSISTENT_BINDING")]
    InconsistentBinding {
        ip: Ipv4Addr,
        macs: Vec<String>,
        message: String,
    },
    #[serde(rename = "EXCESSIVE_GRATUITOUS_ARP")]
    ExcessiveGratuitousArp { count: u64, message: String },
}

/// Evaluates the accumulated run state against the detection rules.
///
/// Pure function of its inputs: the same table and count always yield the
/// same alerts, in table iteration order, with the gratuitous alert last.
/// One `INCONSISTENT_BINDING` per IP claimed by more than one MAC, and at
/// most one `EXCESSIVE_GRATUITOUS_ARP` per run.
pub fn evaluate(bindings: &BindingTable, gratuitous: u64) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for (ip, macs) in bindings {
        if macs.len() > 1 {
            warn!(%ip, macs = macs.len(), "multiple MACs claim one IP");
            alerts.push(Alert::InconsistentBinding {
                ip: *ip,
                macs: macs.iter().map(ToString::to_string).collect(),
                message: format!("Multiple MACs claim {ip}"),
            });
        }
    }

    if gratuitous > GRATUITOUS_ARP_THRESHOLD {
        warn!(count = gratuitous, "excessive gratuitous ARP volume");
        alerts.push(Alert::ExcessiveGratuitousArp {
            count: gratuitous,
            message: "High volume of gratuitous ARP observed".to_string(),
        });
    }

    alerts
}
