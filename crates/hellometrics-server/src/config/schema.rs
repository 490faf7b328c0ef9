use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use hellometrics_core::error::{HelloError, Result};

pub const DEFAULT_BUSINESS_PORT: u16 = 3333;
pub const DEFAULT_SCRAPE_PORT: u16 = 2223;

/// Process configuration. Only `host` and `log_path` come from the
/// environment; ports are fixed defaults that tests override in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub business_port: u16,
    pub scrape_port: u16,
    pub log_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            business_port: DEFAULT_BUSINESS_PORT,
            scrape_port: DEFAULT_SCRAPE_PORT,
            log_path: None,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        // Port 0 asks the OS for an ephemeral port, so two zeros never collide.
        if self.business_port != 0 && self.business_port == self.scrape_port {
            return Err(HelloError::Config(format!(
                "business and scrape listeners must use distinct ports (both {})",
                self.business_port
            )));
        }
        Ok(())
    }

    pub fn business_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.business_port)
    }

    pub fn scrape_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.scrape_port)
    }
}
