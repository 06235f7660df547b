//! Storage backend configuration

use serde::{Deserialize, Serialize};

/// Which store implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    /// Hosted Edge Config store (the default)
    EdgeConfig,
    /// In-process store for local development and tests
    Memory,
}

/// Storage gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store implementation
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    /// Connection string for the fast read path
    /// (format: `https://edge-config.vercel.com/{id}?token={token}`)
    #[serde(default)]
    pub connection_url: Option<String>,
    /// Bearer credential for the administrative write path
    #[serde(default)]
    pub api_token: Option<String>,
    /// Base URL of the management REST API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Well-known key holding the single clipboard record
    #[serde(default = "default_key")]
    pub key: String,
    /// Size ceiling on content, in UTF-8 bytes. Imposed by the store's
    /// service tier; enforced client-side before every write.
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
    /// Per-request timeout for backend calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend() -> StorageBackend {
    StorageBackend::EdgeConfig
}

fn default_api_base() -> String {
    "https://api.vercel.com".to_string()
}

fn default_key() -> String {
    "clipboard_content".to_string()
}

fn default_max_content_bytes() -> usize {
    8 * 1024
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            connection_url: None,
            api_token: None,
            api_base: default_api_base(),
            key: default_key(),
            max_content_bytes: default_max_content_bytes(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StorageConfig {
    /// Fill unset credentials from the environment. The hosting platform
    /// injects `EDGE_CONFIG` when the store is linked to the deployment;
    /// `VERCEL_TOKEN` carries the write credential.
    pub fn apply_env(&mut self) {
        if self.connection_url.is_none() {
            if let Ok(url) = std::env::var("EDGE_CONFIG") {
                if !url.is_empty() {
                    self.connection_url = Some(url);
                }
            }
        }
        if self.api_token.is_none() {
            if let Ok(token) = std::env::var("VERCEL_TOKEN") {
                if !token.is_empty() {
                    self.api_token = Some(token);
                }
            }
        }
    }
}
