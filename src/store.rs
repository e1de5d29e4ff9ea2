//! RecordStore - the in-memory results table and its CRUD operations.
//!
//! The store owns an insertion-ordered `Vec<StudentRecord>` and a
//! [`RecordBackend`]. Mutations only touch memory; nothing reaches the
//! backend until [`RecordStore::save`] is called.
//!
//! ## Example
//!
//! ```ignore
//! use student_results::{InMemoryBackend, RecordChanges, RecordInput, RecordStore};
//!
//! let mut store = RecordStore::open(InMemoryBackend::new());
//! store.add(RecordInput::new("101", "Asha", "Ram", "8.5", "Pass"))?;
//! store.update("101", RecordChanges::new().sgpa("9.0"))?;
//! store.save()?;
//! ```

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::record::{RecordChanges, RecordInput, StudentRecord};
use crate::storage::RecordBackend;

/// Student records held in memory, keyed by roll number.
///
/// Invariant: no two records share a `roll_no`.
pub struct RecordStore<B> {
    backend: B,
    records: Vec<StudentRecord>,
    dirty: bool,
}

impl<B: RecordBackend> RecordStore<B> {
    /// Load the table from `backend`. An absent table loads as empty.
    pub fn load(backend: B) -> Result<Self, StoreError> {
        let records = read_records(&backend)?;
        Ok(Self {
            backend,
            records,
            dirty: false,
        })
    }

    /// Load the table, falling back to an empty one if the backend cannot be read.
    pub fn open(backend: B) -> Self {
        let records = read_records(&backend).unwrap_or_else(|err| {
            warn!(location = %backend.location(), error = %err, "failed to load records, starting empty");
            Vec::new()
        });
        Self {
            backend,
            records,
            dirty: false,
        }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// The record with exactly this roll number, if any.
    pub fn find(&self, roll_no: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.roll_no == roll_no)
    }

    pub fn contains(&self, roll_no: &str) -> bool {
        self.position(roll_no).is_some()
    }

    fn position(&self, roll_no: &str) -> Option<usize> {
        self.records.iter().position(|r| r.roll_no == roll_no)
    }

    /// Validate and append a new record, returning the updated table.
    ///
    /// Nothing changes if validation fails or the roll number is taken.
    pub fn add(&mut self, input: RecordInput) -> Result<&[StudentRecord], StoreError> {
        let record = input.into_record()?;
        if self.contains(&record.roll_no) {
            return Err(StoreError::DuplicateKey(record.roll_no));
        }

        debug!(roll_no = %record.roll_no, "add record");
        self.records.push(record);
        self.dirty = true;
        Ok(&self.records)
    }

    /// Apply `changes` to the record with `roll_no`, keeping its position.
    ///
    /// Every present field is validated before any is written. A new roll
    /// number must not belong to another record.
    pub fn update(
        &mut self,
        roll_no: &str,
        changes: RecordChanges,
    ) -> Result<&StudentRecord, StoreError> {
        let index = self
            .position(roll_no)
            .ok_or_else(|| StoreError::NotFound(roll_no.to_string()))?;
        let parsed = changes.parse()?;

        if let Some(new_roll) = parsed.roll_no.as_deref() {
            if new_roll != roll_no && self.contains(new_roll) {
                return Err(StoreError::DuplicateKey(new_roll.to_string()));
            }
        }

        let record = &mut self.records[index];
        let before = record.clone();
        parsed.apply(record);
        if *record != before {
            debug!(roll_no = %roll_no, "update record");
            self.dirty = true;
        }
        Ok(&self.records[index])
    }

    /// Remove and return the record with `roll_no`.
    pub fn delete(&mut self, roll_no: &str) -> Result<StudentRecord, StoreError> {
        let index = self
            .position(roll_no)
            .ok_or_else(|| StoreError::NotFound(roll_no.to_string()))?;

        debug!(roll_no = %roll_no, "delete record");
        self.dirty = true;
        Ok(self.records.remove(index))
    }

    /// Write the whole table to the backend, replacing what was there.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.backend.save(&self.records)?;
        self.dirty = false;
        info!(location = %self.backend.location(), count = self.records.len(), "saved records");
        Ok(())
    }

    /// True if the table changed since it was last loaded or saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn read_records<B: RecordBackend>(backend: &B) -> Result<Vec<StudentRecord>, StoreError> {
    let records = match backend.load()? {
        Some(records) => drop_duplicates(records, &backend.location()),
        None => {
            info!(location = %backend.location(), "no stored records, starting empty");
            Vec::new()
        }
    };
    info!(location = %backend.location(), count = records.len(), "loaded records");
    Ok(records)
}

/// Keep the first record for each roll number.
fn drop_duplicates(records: Vec<StudentRecord>, location: &str) -> Vec<StudentRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let first = seen.insert(record.roll_no.clone());
            if !first {
                warn!(location = %location, roll_no = %record.roll_no, "dropping duplicate roll number");
            }
            first
        })
        .collect()
}
