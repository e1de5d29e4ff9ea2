//! Form front-end - entry buffers, a selected row, and button-style actions.
//!
//! A `FormSession` models a data-entry form laid over the results table:
//! selecting a row copies it into the entry fields, and Add / Update /
//! Delete / Save act on those fields. Every action answers with a
//! [`Notice`] instead of failing, the way a form would show a message box.
//!
//! ## Example
//!
//! ```ignore
//! use student_results::form::FormSession;
//! use student_results::{Field, InMemoryBackend, RecordStore};
//!
//! let mut store = RecordStore::open(InMemoryBackend::new());
//! let mut form = FormSession::new(&mut store);
//! form.select("101");
//! form.set_entry(Field::Sgpa, "9.0");
//! println!("{}", form.update());
//! ```

pub mod console;

use std::fmt;

use crate::error::StoreError;
use crate::normalize;
use crate::record::{Field, RecordInput, StudentRecord};
use crate::storage::RecordBackend;
use crate::store::RecordStore;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-facing outcome of a form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title,
            message: message.into(),
        }
    }

    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title,
            message: message.into(),
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title,
            message: message.into(),
        }
    }

    /// Translate a store error into the message a form user sees.
    fn from_store_error(title: &'static str, err: &StoreError) -> Self {
        match err {
            StoreError::Validation { field } => {
                Notice::warning(title, format!("Please fill in the {} field.", field))
            }
            StoreError::Type { .. } => Notice::warning(title, "SGPA must be numeric."),
            StoreError::DuplicateKey(roll_no) => {
                Notice::warning(title, format!("Roll number {} already exists.", roll_no))
            }
            StoreError::NotFound(roll_no) => {
                Notice::error(title, format!("No record found for roll {}.", roll_no))
            }
            StoreError::Io(_) => Notice::error(title, err.to_string()),
        }
    }

    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "[{}] {}: {}", level, self.title, self.message)
    }
}

/// The five entry fields of the form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEntries {
    pub roll_no: String,
    pub name: String,
    pub father_name: String,
    pub sgpa: String,
    pub result: String,
}

impl FormEntries {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            roll_no: record.roll_no.clone(),
            name: record.name.clone(),
            father_name: record.father_name.clone(),
            sgpa: record.sgpa_text(),
            result: record.result.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RollNo => &self.roll_no,
            Field::Name => &self.name,
            Field::FatherName => &self.father_name,
            Field::Sgpa => &self.sgpa,
            Field::Result => &self.result,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::RollNo => self.roll_no = value,
            Field::Name => self.name = value,
            Field::FatherName => self.father_name = value,
            Field::Sgpa => self.sgpa = value,
            Field::Result => self.result = value,
        }
    }
}

/// A form bound to a record store.
pub struct FormSession<'a, B> {
    store: &'a mut RecordStore<B>,
    entries: FormEntries,
    selected: Option<String>,
}

impl<'a, B: RecordBackend> FormSession<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self {
            store,
            entries: FormEntries::default(),
            selected: None,
        }
    }

    /// Rows to display, in table order.
    pub fn rows(&self) -> &[StudentRecord] {
        self.store.list_all()
    }

    pub fn entries(&self) -> &FormEntries {
        &self.entries
    }

    /// Roll number of the selected row.
    pub fn selected_roll(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&StudentRecord> {
        self.selected.as_deref().and_then(|roll| self.store.find(roll))
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.store.has_unsaved_changes()
    }

    pub fn set_entry(&mut self, field: Field, value: impl Into<String>) {
        self.entries.set(field, value);
    }

    pub fn clear_entries(&mut self) {
        self.entries = FormEntries::default();
    }

    /// Show every row again and drop the selection.
    pub fn show_all(&mut self) {
        self.selected = None;
    }

    /// Select a row and copy it into the entry fields. Returns false if no such row.
    pub fn select(&mut self, roll_no: &str) -> bool {
        match self.store.find(roll_no) {
            Some(record) => {
                self.entries = FormEntries::from_record(record);
                self.selected = Some(record.roll_no.clone());
                true
            }
            None => false,
        }
    }

    /// Look up a roll number and select it if present.
    pub fn search(&mut self, raw_roll: &str) -> Notice {
        let roll_no = normalize::field_value(Field::RollNo, raw_roll);
        if roll_no.is_empty() {
            return Notice::info("Search", "Please enter a roll number.");
        }
        if self.select(&roll_no) {
            Notice::info("Search", format!("Record found for roll {}.", roll_no))
        } else {
            Notice::info("Search", format!("No record found for roll {}.", roll_no))
        }
    }

    /// Add a new record from the entry fields.
    pub fn add(&mut self) -> Notice {
        let entries = &self.entries;
        let input = normalize::input(RecordInput::new(
            entries.roll_no.as_str(),
            entries.name.as_str(),
            entries.father_name.as_str(),
            entries.sgpa.as_str(),
            entries.result.as_str(),
        ));

        match self.store.add(input) {
            Ok(_) => Notice::info("Add", "Record added successfully."),
            Err(err) => Notice::from_store_error("Add", &err),
        }
    }

    /// Update the selected record from the entry fields.
    ///
    /// Blank entries and entries still matching the record are left out, so
    /// untouched fields keep their stored text.
    pub fn update(&mut self) -> Notice {
        let Some(roll_no) = self.selected.clone() else {
            return Notice::warning("Update", "Select a record to update.");
        };
        let Some(current) = self.store.find(&roll_no) else {
            return Notice::from_store_error("Update", &StoreError::NotFound(roll_no));
        };

        let entries = &self.entries;
        let changes = normalize::changes(Field::ALL.iter().map(|&field| {
            let raw = entries.get(field);
            let stored = current.get(field);
            if raw.trim() == stored || normalize::field_value(field, raw) == stored {
                (field, "")
            } else {
                (field, raw)
            }
        }));
        if changes.is_empty() {
            return Notice::info("Update", "Nothing to update.");
        }

        match self.store.update(&roll_no, changes) {
            Ok(record) => {
                self.entries = FormEntries::from_record(record);
                self.selected = Some(record.roll_no.clone());
                Notice::info("Update", "Record updated successfully.")
            }
            Err(err) => Notice::from_store_error("Update", &err),
        }
    }

    /// Delete the selected record if `confirm` approves it.
    pub fn delete(&mut self, confirm: impl FnOnce(&str) -> bool) -> Notice {
        let Some(roll_no) = self.selected.clone() else {
            return Notice::warning("Delete", "Select a record to delete.");
        };
        if !confirm(&roll_no) {
            return Notice::info("Delete", "Delete cancelled.");
        }

        match self.store.delete(&roll_no) {
            Ok(_) => {
                self.selected = None;
                self.clear_entries();
                Notice::info("Delete", "Record deleted.")
            }
            Err(err) => Notice::from_store_error("Delete", &err),
        }
    }

    /// Write the table to the backing store.
    pub fn save(&mut self) -> Notice {
        match self.store.save() {
            Ok(()) => Notice::info(
                "Save",
                format!("Data saved to {}", self.store.backend().location()),
            ),
            Err(err) => Notice::from_store_error("Save", &err),
        }
    }
}
