//! Service configuration: bind address and CORS mode.
//!
//! Loaded from `config/service.toml` when present, overridable through
//! `TUMMIES_*` env vars, with hard defaults so the binary runs with zero
//! files. The scoring policy tables are deliberately NOT part of this
//! configuration; they are compiled in and immutable after load.

use serde::Deserialize;
use std::{fs, net::SocketAddr, path::PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/service.toml";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

pub const ENV_CONFIG_PATH: &str = "TUMMIES_CONFIG_PATH";
pub const ENV_BIND_ADDR: &str = "TUMMIES_BIND_ADDR";

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Wide-open CORS for the mobile-web caller; disable behind a gateway.
    #[serde(default = "default_true")]
    pub permissive_cors: bool,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            permissive_cors: true,
        }
    }
}

impl ServiceConfig {
    /// Resolve the config path, parse the file if it exists, then apply env
    /// overrides and validate the bind address.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                anyhow::anyhow!("failed to read service config at {}: {}", path.display(), e)
            })?;
            Self::from_toml_str(&raw)?
        } else {
            Self::default()
        };

        if let Ok(addr) = std::env::var(ENV_BIND_ADDR) {
            cfg.bind_addr = addr;
        }

        cfg.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid bind address `{}`: {}", cfg.bind_addr, e))?;

        Ok(cfg)
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
