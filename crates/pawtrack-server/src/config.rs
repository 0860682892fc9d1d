//! Server configuration
//!
//! Read from the environment; `main` loads `.env` through dotenvy first.
//!
//! - `PAWTRACK_HOST` (default `0.0.0.0`)
//! - `PAWTRACK_PORT` (default `5000`)
//! - `PAWTRACK_API_KEY` (unset or empty = authentication disabled)
//! - `PAWTRACK_UTC_OFFSET_MINUTES` (default `0`), where calendar days begin

use anyhow::{Context, Result};
use std::net::SocketAddr;

use pawtrack::DayClock;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub clock: DayClock,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PAWTRACK_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PAWTRACK_PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let offset_minutes = match lookup("PAWTRACK_UTC_OFFSET_MINUTES") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PAWTRACK_UTC_OFFSET_MINUTES: {}", raw))?,
            None => 0,
        };
        let clock = DayClock::from_offset_minutes(offset_minutes)?;

        Ok(Self {
            host: lookup("PAWTRACK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_key: lookup("PAWTRACK_API_KEY").filter(|key| !key.trim().is_empty()),
            clock,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
