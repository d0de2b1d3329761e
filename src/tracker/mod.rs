use std::collections::{BTreeMap, BTreeSet};
use std::net::Ipv4Addr;

use pnet_base::MacAddr;
use tracing::{debug, trace};

use crate::record::{ArpOperation, ArpRecord};


/// Every MAC observed claiming each sender IP during the run.
///
/// Ordered containers keep evaluation and serialization deterministic.
/// Invariant: a key exists only while its set is non-empty — an IP is
/// inserted the moment its first MAC is observed.
pub type BindingTable = BTreeMap<Ipv4Addr, BTreeSet<MacAddr>>;

/// Accumulates IP-to-MAC bindings and the gratuitous ARP count for one run.
///
/// Entries are never evicted, so a very long live session grows the table
/// for its whole duration. Known limitation of the whole-run evaluation
/// model.
#[derive(Debug, Default)]
pub struct BindingTracker {
    bindings: BindingTable,
    gratuitous: u64,
}

impl BindingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one observation into the accumulated state.
    ///
    /// Records with an operation other than who-has/is-at are ignored.
    /// A record with matching sender and target IP counts as a gratuitous
    /// announcement. The final state depends only on which records were
    /// ingested, not on their order.
    pub fn ingest(&mut self, record: &ArpRecord) {
        if record.operation == ArpOperation::Other {
            trace!(?record, "ignoring record with unhandled ARP operation");
            return;
        }

        let macs = self.bindings.entry(record.sender_ip).or_default();
        if macs.insert(record.sender_mac) && macs.len() > 1 {
            debug!(
                ip = %record.sender_ip,
                mac = %record.sender_mac,
                total = macs.len(),
                "additional MAC observed for known IP"
            );
        }

        if record.sender_ip == record.target_ip {
            self.gratuitous += 1;
            trace!(ip = %record.sender_ip, count = self.gratuitous, "gratuitous ARP");
        }
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn gratuitous_count(&self) -> u64 {
        self.gratuitous
    }
}
