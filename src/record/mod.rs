use pnet_base::MacAddr;
use pnet_packet::arp::{ArpHardwareTypes, ArpOperations, ArpPacket};
use pnet_packet::ethernet::{EtherTypes, EthernetPacket};
use pnet_packet::Packet;
use std::net::Ipv4Addr;


/// ARP operation codes that matter for detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArpOperation {
    WhoHas,
    IsAt,
    Other,
}

/// One decoded ARP observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpRecord {
    pub operation: ArpOperation,
    pub sender_ip: Ipv4Addr,
    pub sender_mac: MacAddr,
    pub target_ip: Ipv4Addr,
    pub target_mac: MacAddr,
}

/// Decodes a raw link-layer frame into an [`ArpRecord`].
///
/// Returns `None` for anything that is not a well-formed Ethernet ARP frame:
/// wrong ethertype, truncated payload, or a non-Ethernet hardware type.
/// Callers drop such frames before they reach the tracker.
pub fn decode_frame(frame: &[u8]) -> Option<ArpRecord> {
    let ethernet = EthernetPacket::new(frame)?;
    if ethernet.get_ethertype() != EtherTypes::Arp {
        return None;
    }

    let arp = ArpPacket::new(ethernet.payload())?;
    // Discard invalid packets
    if arp.get_hardware_type() != ArpHardwareTypes::Ethernet {
        return None;
    }

    let operation = match arp.get_operation() {
        ArpOperations::Request => ArpOperation::WhoHas,
        ArpOperations::Reply => ArpOperation::IsAt,
        _ => ArpOperation::Other,
    };

    Some(ArpRecord {
        operation,
        sender_ip: arp.get_sender_proto_addr(),
        sender_mac: arp.get_sender_hw_addr(),
        target_ip: arp.get_target_proto_addr(),
        target_mac: arp.get_target_hw_addr(),
    })
}
