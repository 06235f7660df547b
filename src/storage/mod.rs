//! Storage gateway over the hosted key-value store
//!
//! Reads and writes are independent capabilities, not one transactional
//! object: reads go through the store's low-latency cached accessor, writes
//! through its administrative REST API with a privileged credential. A write
//! followed by a read from the fast path may observe stale data; only the
//! record echoed back by the write itself is immediately consistent.

mod edge_config;
mod memory;

pub use edge_config::EdgeConfigStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};
use crate::types::ClipboardItem;

/// Errors from the storage gateway
#[derive(Debug, Error)]
pub enum StoreError {
    /// Content exceeds the store's size ceiling; detected before any
    /// network call is made
    #[error("content is {size} bytes, exceeding the {limit}-byte storage ceiling")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Backend misconfigured, unreachable, or rejected the request
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Backend answered with something we could not interpret
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Abstraction over the external key-value read/write paths.
///
/// One well-known key holds the JSON-encoded record; a write is a single
/// atomic upsert of that key, so no partial-write state is possible.
#[async_trait]
pub trait ClipboardStore: Send + Sync {
    /// Read the current record. An unconfigured or unreachable read path
    /// yields `Ok(None)` where possible; callers treat any error as "no
    /// content yet" anyway.
    async fn read(&self) -> Result<Option<ClipboardItem>, StoreError>;

    /// Replace the current record. Enforces the size ceiling before issuing
    /// the network call. Single attempt, no retries.
    async fn write(&self, item: &ClipboardItem) -> Result<(), StoreError>;

    /// Whether the read path has credentials to work with
    fn is_configured(&self) -> bool {
        true
    }
}

/// Build the store selected by configuration
pub fn build_store(config: &StorageConfig) -> anyhow::Result<Arc<dyn ClipboardStore>> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new(config.max_content_bytes))),
        StorageBackend::EdgeConfig => Ok(Arc::new(EdgeConfigStore::new(config)?)),
    }
}

/// Pre-flight size check shared by all backends. The ceiling applies to the
/// UTF-8 byte length of the content field, not the encoded record.
pub(crate) fn check_ceiling(content: &str, limit: usize) -> Result<(), StoreError> {
    let size = content.len();
    if size > limit {
        return Err(StoreError::PayloadTooLarge { size, limit });
    }
    Ok(())
}
