#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_mount_prefix, validate_path, Validate};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PREFIX: &str = "/api";
pub const DEFAULT_JOKES_FILE: &str = "./jokes.json";

/// Fully resolved settings the server starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub prefix: String,
    pub jokes_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            prefix: DEFAULT_PREFIX.to_string(),
            jokes_file: PathBuf::from(DEFAULT_JOKES_FILE),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Overlays every value the file sets; unset keys keep their current value.
    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        if let Some(server) = &file.server {
            if let Some(bind) = server.bind {
                self.bind_address = bind;
            }
            if let Some(port) = server.port {
                self.port = port;
            }
            if let Some(prefix) = &server.prefix {
                self.prefix = prefix.clone();
            }
        }
        if let Some(jokes) = &file.jokes {
            if let Some(path) = &jokes.file {
                self.jokes_file = path.clone();
            }
        }
        self
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_mount_prefix("server.prefix", &self.prefix)?;
        validate_path("jokes.file", &self.jokes_file.to_string_lossy())?;
        Ok(())
    }
}
