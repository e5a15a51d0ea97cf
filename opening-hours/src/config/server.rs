//! Server settings from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use super::ConfigError;

/// Default path of the opening-hours document.
pub const DEFAULT_CONFIG_PATH: &str = "opening-hours.json";

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default directory for static assets.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the opening-hours JSON document.
    pub config_path: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read settings from `OPENING_HOURS_CONFIG`, `OPENING_HOURS_ADDR` and
    /// `OPENING_HOURS_STATIC`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config_path = lookup("OPENING_HOURS_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());
        let addr = lookup("OPENING_HOURS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let static_dir = lookup("OPENING_HOURS_STATIC").unwrap_or_else(|| DEFAULT_STATIC_DIR.into());

        let addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr { value: addr, source })?;

        Ok(Self {
            config_path: config_path.into(),
            addr,
            static_dir: static_dir.into(),
        })
    }
}
