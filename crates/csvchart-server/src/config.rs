// File: crates/csvchart-server/src/config.rs
// Summary: Command-line configuration for the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use csvchart_core::Alignment;

/// Upload a CSV export and chart one column against another.
#[derive(Parser, Debug, Clone)]
#[command(name = "csvchart-server", version)]
pub struct Config {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// IP address to serve on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub address: IpAddr,

    /// Port to serve on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Maximum upload body size in MB
    #[arg(long, default_value_t = 10)]
    pub upload_limit_mb: usize,

    /// How category and value columns are paired: row-synchronized or truncate
    #[arg(long, default_value_t = Alignment::RowSynchronized)]
    pub alignment: Alignment,

    /// Chart theme (westeros, dark)
    #[arg(long, default_value = "westeros")]
    pub theme: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    pub fn upload_limit_bytes(&self) -> usize {
        self.upload_limit_mb.saturating_mul(1024 * 1024)
    }
}
