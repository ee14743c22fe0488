//! The store handle shared by all repositories.
//!
//! Collections are read whole, mutated in memory, and written back whole.
//! Repositories hold [`Store::lock`] for the entire read-modify-write cycle,
//! so operations run one at a time and no partial state is ever observable.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::medium::{MemoryMedium, StorageMedium};

/// Key of the projects collection.
pub const PROJECTS_KEY: &str = "dt_projects";
/// Key of the documents collection.
pub const DOCUMENTS_KEY: &str = "dt_documents";
/// Key of the templates collection.
pub const TEMPLATES_KEY: &str = "dt_templates";
/// Key of the catalog version marker.
pub const VERSION_KEY: &str = "dt_version";

/// Handle over a storage medium plus the operation lock.
pub struct Store {
    medium: Arc<dyn StorageMedium>,
    op_lock: Mutex<()>,
}

impl Store {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self {
            medium,
            op_lock: Mutex::new(()),
        }
    }

    /// A store over a fresh [`MemoryMedium`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryMedium::new()))
    }

    /// Acquire the operation lock. Not reentrant.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.op_lock.lock().await
    }

    /// Whether anything is stored under `key`.
    pub async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.medium.read(key).await?.is_some())
    }

    /// Load the collection under `key`. A missing key is an empty collection.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.medium.read(key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the collection under `key`.
    pub async fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let mut batch = WriteBatch::default();
        batch.put(key, items)?;
        self.commit(batch).await
    }

    /// Write every entry of `batch` atomically.
    pub async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if batch.entries.is_empty() {
            return Ok(());
        }
        self.medium.write_batch(&batch.entries).await
    }

    /// Check that the underlying medium is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.medium.ping().await
    }
}

/// A set of collection writes committed together.
#[derive(Debug, Default)]
pub struct WriteBatch {
    entries: Vec<(String, String)>,
}

impl WriteBatch {
    /// Stage `items` as the new value of `key`.
    pub fn put<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<&mut Self, StoreError> {
        let encoded = serde_json::to_string(items).map_err(StoreError::Encode)?;
        self.entries.push((key.to_string(), encoded));
        Ok(self)
    }

    /// Stage a raw string value.
    pub fn put_raw(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
