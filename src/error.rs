use std::fmt;

use crate::record::Field;

/// Error type for record store operations.
///
/// Every variant is recoverable: front-ends report it and keep running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing or empty.
    Validation { field: Field },
    /// A field that must be numeric did not parse as a number.
    Type { field: Field, value: String },
    /// A record with this roll number already exists.
    DuplicateKey(String),
    /// No record with this roll number exists.
    NotFound(String),
    /// The backing medium could not be read or written.
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation { field } => write!(f, "{} must not be empty", field),
            StoreError::Type { field, value } => {
                write!(f, "{} must be numeric (got {:?})", field, value)
            }
            StoreError::DuplicateKey(roll_no) => {
                write!(f, "roll number {} already exists", roll_no)
            }
            StoreError::NotFound(roll_no) => write!(f, "no record found for roll {}", roll_no),
            StoreError::Io(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
