//! Storage - the persisted medium behind a record store.
//!
//! A backend only knows how to read and write a whole table. All CRUD
//! semantics live in [`RecordStore`](crate::RecordStore); backends are
//! swapped without touching them.
//!
//! ## Example
//!
//! ```ignore
//! use student_results::{CsvFile, RecordStore};
//!
//! let store = RecordStore::open(CsvFile::new("results.csv"));
//! ```

mod csv_file;
mod in_memory;

use crate::error::StoreError;
use crate::record::StudentRecord;

/// Whole-table persistence for student records.
pub trait RecordBackend {
    /// Read every stored record in order. Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<StudentRecord>>, StoreError>;

    /// Replace the stored table with `records`.
    fn save(&self, records: &[StudentRecord]) -> Result<(), StoreError>;

    /// Human-readable location, used in log lines and "saved to" messages.
    fn location(&self) -> String;
}

pub use csv_file::CsvFile;
pub use in_memory::InMemoryBackend;
