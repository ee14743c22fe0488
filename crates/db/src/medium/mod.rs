//! Key-value storage media.
//!
//! The platform persists three JSON collections under fixed keys. A medium
//! only stores opaque strings; it never interprets them. Every backend
//! implements [`StorageMedium`]:
//!
//! - [`MemoryMedium`] -- `HashMap`-backed, for tests and throwaway sessions
//! - [`SqliteMedium`] -- a single `kv_entries` table in a local SQLite file

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;

pub use memory::MemoryMedium;
pub use sqlite::SqliteMedium;

/// Capability to read and atomically write string values by key.
#[async_trait]
pub trait StorageMedium: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write every `(key, value)` pair. Either all writes become visible or
    /// none do.
    async fn write_batch(&self, entries: &[(String, String)]) -> Result<(), StoreError>;

    /// Check that the medium is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
