//! Server configuration from the environment
//!
//! Variables (a `.env` file in the working directory is honoured):
//!   FINCALC_HOST           bind address, default 127.0.0.1
//!   FINCALC_PORT           port, default 5000
//!   FINCALC_REFERENCE_DIR  directory with currency_rates.csv / bank_holidays.csv

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub reference_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (lets tests avoid touching process env)
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("FINCALC_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .context("FINCALC_HOST must be an IP address")?;

        let port = match lookup("FINCALC_PORT") {
            Some(raw) => raw.parse::<u16>().context("FINCALC_PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        let reference_dir = lookup("FINCALC_REFERENCE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            reference_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            reference_dir: None,
        }
    }
}
