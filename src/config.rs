//! Command line and environment configuration for the server.

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// The REST API server for the ledger.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File path to the application SQLite database.
    #[arg(long, env = "LEDGER_DB_PATH")]
    pub db_path: PathBuf,

    /// The port to serve the API from.
    #[arg(short, long, env = "LEDGER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// The name attached to every request span in the logs.
    #[arg(long, env = "LEDGER_SERVICE_NAME", default_value = "ledger-api")]
    pub service_name: String,

    /// Also write debug level logs to this file.
    #[arg(long, env = "LEDGER_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// The address to listen on: all interfaces on [Config::port].
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
