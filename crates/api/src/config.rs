//! Process configuration read from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "DECKSTORE_BIND_ADDR";
pub const ORDER_LOG_ENV: &str = "DECKSTORE_ORDER_LOG";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a socket address ({value:?}): {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON order log file; `None` keeps orders in memory.
    pub order_log: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            order_log: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_ENV).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
            tracing::warn!("{BIND_ADDR_ENV} not set; using {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: raw_addr.clone(),
                source,
            })?;

        let order_log = lookup(ORDER_LOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        if order_log.is_none() {
            tracing::warn!("{ORDER_LOG_ENV} not set; orders are kept in memory only");
        }

        Ok(Self {
            bind_addr,
            order_log,
        })
    }
}
