//! In-memory store for tests and local development
//!
//! Same contract as the hosted backend, including the size ceiling, but the
//! record lives in process memory and vanishes on restart.

use parking_lot::RwLock;

use super::{check_ceiling, ClipboardStore, StoreError};
use crate::types::ClipboardItem;

pub struct MemoryStore {
    item: RwLock<Option<ClipboardItem>>,
    max_content_bytes: usize,
}

impl MemoryStore {
    pub fn new(max_content_bytes: usize) -> Self {
        Self {
            item: RwLock::new(None),
            max_content_bytes,
        }
    }
}

#[async_trait::async_trait]
impl ClipboardStore for MemoryStore {
    async fn read(&self) -> Result<Option<ClipboardItem>, StoreError> {
        Ok(self.item.read().clone())
    }

    async fn write(&self, item: &ClipboardItem) -> Result<(), StoreError> {
        check_ceiling(&item.content, self.max_content_bytes)?;
        *self.item.write() = Some(item.clone());
        Ok(())
    }
}
