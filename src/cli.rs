use std::path::PathBuf;

use clap::Parser;

/// arpwarden, an ARP spoofing detector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a stored ARP capture to replay
    #[arg(long = "pcap", conflicts_with = "live")]
    pub pcap_path: Option<PathBuf>,

    /// Sample live ARP traffic instead of replaying a capture
    #[arg(long = "live")]
    pub live: bool,

    /// Network interface to sample in live mode
    #[arg(short = 'i', long = "iface")]
    pub interface: Option<String>,

    /// Live sampling duration in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

pub fn parse() -> Args {
    Args::parse()
}
