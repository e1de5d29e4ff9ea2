//! Student result records: a CSV-backed record store with two front-ends.
//!
//! [`RecordStore`] is the only stateful piece. The [`menu`] and [`form`]
//! modules are presentation adapters over it, and [`storage`] holds the
//! interchangeable backends.

mod config;
mod error;
mod record;
mod store;

pub mod form;
pub mod menu;
pub mod normalize;
pub mod render;
pub mod storage;

pub use config::{StoreConfig, DEFAULT_FILE, FILE_ENV};
pub use error::StoreError;
pub use record::{Field, RecordChanges, RecordInput, StudentRecord, UnknownField, COLUMNS};
pub use storage::{CsvFile, InMemoryBackend, RecordBackend};
pub use store::RecordStore;
