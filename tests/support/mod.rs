#![allow(dead_code)]

use student_results::{InMemoryBackend, RecordInput, RecordStore, StudentRecord};

pub fn asha() -> RecordInput {
    RecordInput::new("101", "Asha", "Ram", "8.5", "Pass")
}

pub fn ravi() -> RecordInput {
    RecordInput::new("102", "Ravi Kumar", "Mohan Lal", "6.25", "Re-Appear")
}

pub fn meena() -> RecordInput {
    RecordInput::new("103", "Meena", "Suresh", "9", "Pass")
}

pub fn record(input: RecordInput) -> StudentRecord {
    input.into_record().expect("fixture must be valid")
}

/// A store over a fresh in-memory backend, plus a handle to that backend.
pub fn memory_store() -> (RecordStore<InMemoryBackend>, InMemoryBackend) {
    let backend = InMemoryBackend::new();
    (RecordStore::open(backend.clone()), backend)
}

/// A store already holding `inputs`, in order.
pub fn store_with(inputs: Vec<RecordInput>) -> RecordStore<InMemoryBackend> {
    let (mut store, _) = memory_store();
    for input in inputs {
        store.add(input).expect("fixture must be addable");
    }
    store
}

pub fn rolls(records: &[StudentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.roll_no.as_str()).collect()
}
