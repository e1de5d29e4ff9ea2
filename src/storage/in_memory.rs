//! InMemoryBackend - Vec-backed medium for testing and development.

use std::sync::{Arc, RwLock};

use super::RecordBackend;
use crate::error::StoreError;
use crate::record::StudentRecord;

/// In-memory backend. Clone-friendly via Arc: clones share the same stored table.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    storage: Arc<RwLock<Option<Vec<StudentRecord>>>>,
}

impl InMemoryBackend {
    /// Create a backend with nothing stored yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already holds `records`.
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Some(records))),
        }
    }

    /// Snapshot of what was last saved, if anything.
    pub fn stored(&self) -> Result<Option<Vec<StudentRecord>>, StoreError> {
        self.load()
    }
}

impl RecordBackend for InMemoryBackend {
    fn load(&self) -> Result<Option<Vec<StudentRecord>>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Io("lock poisoned".into()))?;
        Ok(storage.clone())
    }

    fn save(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Io("lock poisoned".into()))?;
        *storage = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
