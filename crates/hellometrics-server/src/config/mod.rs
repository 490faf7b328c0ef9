//! Environment-driven service config.
//!
//! - `POD_IP`   : bind host for both listeners (empty/unset = all IPv4 interfaces)
//! - `LOG_PATH` : optional file that duplicates console logs

pub mod schema;

use std::net::IpAddr;
use std::path::PathBuf;

use hellometrics_core::error::{HelloError, Result};

pub use schema::{ServiceConfig, DEFAULT_BUSINESS_PORT, DEFAULT_SCRAPE_PORT};

pub const ENV_POD_IP: &str = "POD_IP";
pub const ENV_LOG_PATH: &str = "LOG_PATH";

pub fn from_env() -> Result<ServiceConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the config from an arbitrary variable source.
pub fn from_lookup<F>(lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = ServiceConfig::default();

    if let Some(raw) = lookup(ENV_POD_IP) {
        let raw = raw.trim();
        if !raw.is_empty() {
            cfg.host = parse_host(raw)?;
        }
    }

    cfg.log_path = lookup(ENV_LOG_PATH)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    cfg.validate()?;
    Ok(cfg)
}

fn parse_host(raw: &str) -> Result<IpAddr> {
    let unbracketed = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(raw);
    unbracketed
        .parse()
        .map_err(|e| HelloError::Config(format!("{ENV_POD_IP}={raw:?} is not an IP address: {e}")))
}
