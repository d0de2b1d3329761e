use super::*;
use crate::detector;
use crate::record::{ArpOperation, ArpRecord};
use pnet_base::MacAddr;

fn record(sender_ip: Ipv4Addr, sender_mac: MacAddr, target_ip: Ipv4Addr) -> ArpRecord {
    ArpRecord {
        operation: ArpOperation::IsAt,
        sender_ip,
        sender_mac,
        target_ip,
        target_mac: MacAddr::zero(),
    }
}

#[test]
fn test_empty_run_yields_zeroed_report() {
    let tracker = BindingTracker::new();
    let alerts = detector::evaluate(tracker.bindings(), tracker.gratuitous_count());
    let report = build(&tracker, alerts);

    assert_eq!(report.summary.unique_ips, 0);
    assert!(report.summary.hosts_observed.is_empty());
    assert_eq!(report.summary.gratuitous_count, 0);
    assert!(report.alerts.is_empty());
    assert!(report.ts > 0);
}

#[test]
fn test_hosts_observed_lists_each_ip_with_its_macs() {
    let mut tracker = BindingTracker::new();
    let ip_a = Ipv4Addr::new(10, 0, 0, 1);
    let ip_b = Ipv4Addr::new(10, 0, 0, 2);
    let first = MacAddr::new(0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA);
    let second = MacAddr::new(0xBB, 0xBB, 0xBB, 0xBB, 0xBB, 0xBB);
    tracker.ingest(&record(ip_a, first, ip_b));
    tracker.ingest(&record(ip_a, second, ip_b));
    tracker.ingest(&record(ip_b, second, ip_a));

    let report = build(&tracker, Vec::new());
    assert_eq!(report.summary.unique_ips, 2);
    assert_eq!(report.summary.hosts_observed.len(), 2);

    let host_a = &report.summary.hosts_observed[0];
    assert_eq!(host_a.ip, ip_a);
    assert_eq!(host_a.macs.len(), 2);
    assert!(host_a.macs.contains(&first.to_string()));
    assert!(host_a.macs.contains(&second.to_string()));

    let host_b = &report.summary.hosts_observed[1];
    assert_eq!(host_b.ip, ip_b);
    assert_eq!(host_b.macs, vec![second.to_string()]);
}

#[test]
fn test_report_serializes_expected_json_shape() {
    let mut tracker = BindingTracker::new();
    let ip = Ipv4Addr::new(10, 0, 0, 1);
    tracker.ingest(&record(ip, MacAddr::new(0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA), ip));
    tracker.ingest(&record(ip, MacAddr::new(0xBB, 0xBB, 0xBB, 0xBB, 0xBB, 0xBB), ip));

    let alerts = detector::evaluate(tracker.bindings(), tracker.gratuitous_count());
    let report = build(&tracker, alerts);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["summary"]["unique_ips"], 1);
    assert_eq!(value["summary"]["gratuitous_count"], 2);
    assert_eq!(value["summary"]["hosts_observed"][0]["ip"], "10.0.0.1");
    assert_eq!(value["alerts"][0]["type"], "INCONSISTENT_BINDING");
    assert_eq!(value["alerts"][0]["ip"], "10.0.0.1");
    assert_eq!(value["alerts"][0]["macs"].as_array().unwrap().len(), 2);
    assert_eq!(value["alerts"][0]["message"], "Multiple MACs claim 10.0.0.1");
}

#[test]
fn test_gratuitous_alert_serializes_type_and_count() {
    let tracker = BindingTracker::new();
    let alerts = detector::evaluate(tracker.bindings(), 11);
    let report = build(&tracker, alerts);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["alerts"][0]["type"], "EXCESSIVE_GRATUITOUS_ARP");
    assert_eq!(value["alerts"][0]["count"], 11);
}
