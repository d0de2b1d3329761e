mod cli;
mod detector;
mod record;
mod report;
mod source;
mod tracker;

use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::source::CaptureConfig;
use crate::tracker::BindingTracker;

fn main() -> Result<()> {
    let args = cli::parse();

    // Logs go to stderr so the JSON report stays the sole stdout output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CaptureConfig {
        pcap_path: args.pcap_path,
        live: args.live,
        interface: args.interface,
        timeout: Duration::from_secs(args.timeout_seconds),
    };

    let records = source::collect_records(&config)?;

    let mut tracker = BindingTracker::new();
    for record in &records {
        tracker.ingest(record);
    }

    let alerts = detector::evaluate(tracker.bindings(), tracker.gratuitous_count());
    let report = report::build(&tracker, alerts);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
