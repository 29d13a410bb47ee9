//! Service configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("PORT must be a valid u16, got {0:?}")]
  Port(String),

  #[error("BIND_ADDR must be an IP address, got {0:?}")]
  BindAddr(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// JSON catalog replacing the built-in one.
  pub catalog_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 5005,
      catalog_path: None,
    }
  }
}

impl ServiceConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds config from any key lookup; unset keys keep their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut cfg = Self::default();
    if let Some(port) = lookup("PORT") {
      cfg.port = port.trim().parse().map_err(|_| ConfigError::Port(port))?;
    }
    if let Some(addr) = lookup("BIND_ADDR") {
      cfg.bind_addr = addr.trim().parse().map_err(|_| ConfigError::BindAddr(addr))?;
    }
    cfg.catalog_path = lookup("PEST_CATALOG_PATH")
      .filter(|p| !p.trim().is_empty())
      .map(PathBuf::from);
    Ok(cfg)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind_addr, self.port)
  }
}
