//! Raw user input and its conversion into typed records.

use serde::{Deserialize, Serialize};

use super::{Field, StudentRecord};
use crate::error::StoreError;

/// A new record as raw strings, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    pub roll_no: String,
    pub name: String,
    pub father_name: String,
    pub sgpa: String,
    pub result: String,
}

impl RecordInput {
    pub fn new(
        roll_no: impl Into<String>,
        name: impl Into<String>,
        father_name: impl Into<String>,
        sgpa: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            roll_no: roll_no.into(),
            name: name.into(),
            father_name: father_name.into(),
            sgpa: sgpa.into(),
            result: result.into(),
        }
    }

    /// Validate and convert into a record.
    ///
    /// Empty fields are reported before a non-numeric SGPA.
    pub fn into_record(self) -> Result<StudentRecord, StoreError> {
        for (field, value) in [
            (Field::RollNo, &self.roll_no),
            (Field::Name, &self.name),
            (Field::FatherName, &self.father_name),
            (Field::Sgpa, &self.sgpa),
            (Field::Result, &self.result),
        ] {
            require(field, value)?;
        }
        let sgpa = parse_sgpa(&self.sgpa)?;

        Ok(StudentRecord {
            roll_no: self.roll_no,
            name: self.name,
            father_name: self.father_name,
            sgpa,
            result: self.result,
        })
    }
}

/// Field changes for an update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordChanges {
    #[serde(default)]
    pub roll_no: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub sgpa: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

impl RecordChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roll_no(mut self, value: impl Into<String>) -> Self {
        self.roll_no = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn father_name(mut self, value: impl Into<String>) -> Self {
        self.father_name = Some(value.into());
        self
    }

    pub fn sgpa(mut self, value: impl Into<String>) -> Self {
        self.sgpa = Some(value.into());
        self
    }

    pub fn result(mut self, value: impl Into<String>) -> Self {
        self.result = Some(value.into());
        self
    }

    /// Set a field by name; `None` clears the change.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::RollNo => self.roll_no = value,
            Field::Name => self.name = value,
            Field::FatherName => self.father_name = value,
            Field::Sgpa => self.sgpa = value,
            Field::Result => self.result = value,
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.roll_no.is_none()
            && self.name.is_none()
            && self.father_name.is_none()
            && self.sgpa.is_none()
            && self.result.is_none()
    }

    /// Validate every present field without touching any record.
    pub(crate) fn parse(self) -> Result<ParsedChanges, StoreError> {
        let text = |field: Field, value: Option<String>| -> Result<Option<String>, StoreError> {
            match value {
                Some(v) => require(field, &v).map(|_| Some(v)),
                None => Ok(None),
            }
        };

        let roll_no = text(Field::RollNo, self.roll_no)?;
        let name = text(Field::Name, self.name)?;
        let father_name = text(Field::FatherName, self.father_name)?;
        let sgpa_raw = text(Field::Sgpa, self.sgpa)?;
        let result = text(Field::Result, self.result)?;
        let sgpa = sgpa_raw.as_deref().map(parse_sgpa).transpose()?;

        Ok(ParsedChanges {
            roll_no,
            name,
            father_name,
            sgpa,
            result,
        })
    }
}

/// Changes that passed validation and can be applied without failing.
#[derive(Debug)]
pub(crate) struct ParsedChanges {
    pub roll_no: Option<String>,
    pub name: Option<String>,
    pub father_name: Option<String>,
    pub sgpa: Option<f64>,
    pub result: Option<String>,
}

impl ParsedChanges {
    pub fn apply(self, record: &mut StudentRecord) {
        if let Some(roll_no) = self.roll_no {
            record.roll_no = roll_no;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(father_name) = self.father_name {
            record.father_name = father_name;
        }
        if let Some(sgpa) = self.sgpa {
            record.sgpa = sgpa;
        }
        if let Some(result) = self.result {
            record.result = result;
        }
    }
}

fn require(field: Field, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation { field });
    }
    Ok(())
}

fn parse_sgpa(raw: &str) -> Result<f64, StoreError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(StoreError::Type {
            field: Field::Sgpa,
            value: raw.to_string(),
        }),
    }
}
