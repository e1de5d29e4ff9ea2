//! Student records - the row type held by the store and its field names.
//!
//! A `StudentRecord` is always valid: it can only be built by parsing a
//! [`RecordInput`], which enforces the non-empty and numeric constraints.
//!
//! ## Example
//!
//! ```ignore
//! use student_results::RecordInput;
//!
//! let record = RecordInput::new("101", "Asha", "Ram", "8.5", "Pass").into_record()?;
//! assert_eq!(record.sgpa, 8.5);
//! ```

mod input;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use input::{RecordChanges, RecordInput};

/// Column names of the persisted table, in order.
pub const COLUMNS: [&str; 5] = ["roll_no", "name", "father_name", "sgpa", "result"];

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub roll_no: String,
    pub name: String,
    pub father_name: String,
    pub sgpa: f64,
    pub result: String,
}

impl StudentRecord {
    /// SGPA rendered the way it is persisted: always with a fractional part (`9.0`, `8.5`).
    pub fn sgpa_text(&self) -> String {
        format_sgpa(self.sgpa)
    }

    /// The record as the five column strings, in `COLUMNS` order.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.roll_no.clone(),
            self.name.clone(),
            self.father_name.clone(),
            self.sgpa_text(),
            self.result.clone(),
        ]
    }

    /// Value of a single field as text.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::RollNo => self.roll_no.clone(),
            Field::Name => self.name.clone(),
            Field::FatherName => self.father_name.clone(),
            Field::Sgpa => self.sgpa_text(),
            Field::Result => self.result.clone(),
        }
    }
}

fn format_sgpa(sgpa: f64) -> String {
    if sgpa.fract() == 0.0 && sgpa.abs() < 1e15 {
        format!("{:.1}", sgpa)
    } else {
        format!("{}", sgpa)
    }
}

/// A field of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RollNo,
    Name,
    FatherName,
    Sgpa,
    Result,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::RollNo,
        Field::Name,
        Field::FatherName,
        Field::Sgpa,
        Field::Result,
    ];

    /// Column name in the persisted table.
    pub fn column(self) -> &'static str {
        match self {
            Field::RollNo => COLUMNS[0],
            Field::Name => COLUMNS[1],
            Field::FatherName => COLUMNS[2],
            Field::Sgpa => COLUMNS[3],
            Field::Result => COLUMNS[4],
        }
    }

    /// Short label used by the front-ends ("Roll No", "Father Name", ...).
    pub fn label(self) -> &'static str {
        match self {
            Field::RollNo => "Roll No",
            Field::Name => "Name",
            Field::FatherName => "Father Name",
            Field::Sgpa => "SGPA",
            Field::Result => "Result",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Field::RollNo => "roll number",
            Field::Name => "name",
            Field::FatherName => "father name",
            Field::Sgpa => "SGPA",
            Field::Result => "result",
        };
        f.write_str(text)
    }
}

/// Error returned when a string names no known field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts column names and the obvious short forms (`roll`, `father`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "roll_no" | "roll" | "rollno" => Ok(Field::RollNo),
            "name" => Ok(Field::Name),
            "father_name" | "father" => Ok(Field::FatherName),
            "sgpa" => Ok(Field::Sgpa),
            "result" => Ok(Field::Result),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}
