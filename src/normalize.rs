//! Input clean-up done by the front-ends before calling the store.
//!
//! The store validates but never reformats; trimming and casing are a
//! presentation concern.

use crate::record::{Field, RecordChanges, RecordInput};

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// `"re-appear"` becomes `"Re-Appear"`, `"ASHA devi"` becomes `"Asha Devi"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Trim a raw value and apply the casing rule for its field.
pub fn field_value(field: Field, raw: &str) -> String {
    let trimmed = raw.trim();
    match field {
        Field::Name | Field::FatherName | Field::Result => title_case(trimmed),
        Field::RollNo | Field::Sgpa => trimmed.to_string(),
    }
}

/// Trimmed, cased value, or `None` for blank input.
pub fn optional_value(field: Field, raw: &str) -> Option<String> {
    let value = field_value(field, raw);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Normalize every field of a new record.
pub fn input(raw: RecordInput) -> RecordInput {
    RecordInput {
        roll_no: field_value(Field::RollNo, &raw.roll_no),
        name: field_value(Field::Name, &raw.name),
        father_name: field_value(Field::FatherName, &raw.father_name),
        sgpa: field_value(Field::Sgpa, &raw.sgpa),
        result: field_value(Field::Result, &raw.result),
    }
}

/// Build update changes from raw values; blank values are left out.
pub fn changes<'a>(raw: impl IntoIterator<Item = (Field, &'a str)>) -> RecordChanges {
    let mut changes = RecordChanges::new();
    for (field, value) in raw {
        changes.set(field, optional_value(field, value));
    }
    changes
}
