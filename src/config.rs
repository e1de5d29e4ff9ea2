use std::env;
use std::path::PathBuf;

use crate::storage::CsvFile;
use crate::store::RecordStore;

/// File used when neither a flag nor the environment names one.
pub const DEFAULT_FILE: &str = "student_results_sem2_extracted.csv";

/// Environment variable overriding the backing file.
pub const FILE_ENV: &str = "STUDENT_RESULTS_FILE";

/// Where the results table is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read `STUDENT_RESULTS_FILE`, falling back to the default file name.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(FILE_ENV) {
            Some(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    /// An explicit path wins over the environment.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        match cli_path {
            Some(path) => Self::new(path),
            None => Self::from_env(),
        }
    }

    pub fn backend(&self) -> CsvFile {
        CsvFile::new(&self.path)
    }

    /// Open the store at startup. An unreadable file starts an empty table.
    pub fn open_store(&self) -> RecordStore<CsvFile> {
        RecordStore::open(self.backend())
    }
}
