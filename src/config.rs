use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::roster::CapacityPolicy;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Service configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub capacity: CapacityPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("MERGINGTON_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse MERGINGTON_BIND")?;
        let static_dir = lookup("MERGINGTON_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let capacity = match lookup("MERGINGTON_CAPACITY") {
            Some(value) => value
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| "parse MERGINGTON_CAPACITY")?,
            None => CapacityPolicy::default(),
        };
        Ok(Self {
            bind_addr,
            static_dir,
            capacity,
        })
    }
}
