//! Configuration for clipbox

mod http;
mod logging;
mod storage;

pub use http::HttpConfig;
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main configuration for the clipbox service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Storage gateway configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// After deserializing, this fills unset storage credentials from the
    /// environment and validates all fields so callers don't need to
    /// remember those steps themselves.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.storage.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        // HTTP listen address: parse the full socket address so malformed
        // hosts (e.g. a bare IPv6 address) fail here, not at bind time
        match self.http.listen_addr.parse::<SocketAddr>() {
            Ok(addr) if addr.port() == 0 => {
                errors.push("HTTP listen port must not be 0".to_string());
            }
            Ok(_) => {}
            Err(_) => {
                errors.push(format!(
                    "invalid HTTP listen address '{}' (expected host:port)",
                    self.http.listen_addr
                ));
            }
        }

        // Storage
        if self.storage.key.is_empty() {
            errors.push("storage key must not be empty".to_string());
        }
        if self.storage.max_content_bytes == 0 {
            errors.push("max_content_bytes must be positive".to_string());
        }
        if self.storage.timeout_secs == 0 {
            errors.push("storage timeout_secs must be positive".to_string());
        }
        if self.storage.api_base.is_empty() {
            errors.push("storage api_base must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}
