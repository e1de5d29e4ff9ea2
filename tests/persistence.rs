//! Integration tests for CSV persistence and startup behaviour.

mod support;

use std::fs;

use student_results::{CsvFile, RecordChanges, RecordStore, StoreConfig, StoreError};
use support::{asha, meena, ravi, rolls};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let mut store = RecordStore::load(CsvFile::new(&path)).unwrap();
    assert!(store.is_empty());
    store.add(meena()).unwrap();
    store.add(asha()).unwrap();
    store.add(ravi()).unwrap();
    store
        .update("101", RecordChanges::new().sgpa("9.0"))
        .unwrap();
    store.save().unwrap();

    let reloaded = RecordStore::load(CsvFile::new(&path)).unwrap();
    assert_eq!(reloaded.list_all(), store.list_all());
    assert_eq!(rolls(reloaded.list_all()), ["103", "101", "102"]);
    assert!(!reloaded.has_unsaved_changes());
}

#[test]
fn file_layout_matches_the_header_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let mut store = RecordStore::open(CsvFile::new(&path));
    store.add(asha()).unwrap();
    store.add(meena()).unwrap();
    store.save().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "roll_no,name,father_name,sgpa,result",
            "101,Asha,Ram,8.5,Pass",
            "103,Meena,Suresh,9.0,Pass",
        ]
    );
}

#[test]
fn second_save_replaces_not_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let mut store = RecordStore::open(CsvFile::new(&path));
    store.add(asha()).unwrap();
    store.add(ravi()).unwrap();
    store.save().unwrap();

    store.delete("101").unwrap();
    store.save().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("Asha"));
}

#[test]
fn unsaved_changes_are_lost_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let mut store = RecordStore::open(CsvFile::new(&path));
    store.add(asha()).unwrap();
    store.save().unwrap();
    store.add(ravi()).unwrap();
    assert!(store.has_unsaved_changes());

    let reloaded = RecordStore::open(CsvFile::new(&path));
    assert_eq!(rolls(reloaded.list_all()), ["101"]);
}

#[test]
fn load_of_file_without_the_expected_header_fails_but_open_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "roll,student,sgpa\n101,Asha,8.5\n").unwrap();

    let err = RecordStore::load(CsvFile::new(&path)).err().unwrap();
    assert!(matches!(err, StoreError::Io(_)));

    let store = RecordStore::open(CsvFile::new(&path));
    assert!(store.is_empty());
}

#[test]
fn invalid_rows_are_skipped_and_valid_rows_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(
        &path,
        "roll_no,name,father_name,sgpa,result\n\
         101,Asha,Ram,8.5,Pass\n\
         102,Ravi,Mohan,7.0,\n\
         103,Meena,Suresh,nine,Pass\n",
    )
    .unwrap();

    let mut store = RecordStore::open(CsvFile::new(&path));
    assert_eq!(rolls(store.list_all()), ["101"]);
    store.save().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        ["roll_no,name,father_name,sgpa,result", "101,Asha,Ram,8.5,Pass"]
    );
}

#[test]
fn hand_edited_duplicates_keep_the_first_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(
        &path,
        "roll_no,name,father_name,sgpa,result\n\
         101,Asha,Ram,8.5,Pass\n\
         101,Copy,Ram,1.0,Pass\n\
         102,Ravi,Mohan,7.0,Pass\n",
    )
    .unwrap();

    let store = RecordStore::load(CsvFile::new(&path)).unwrap();
    assert_eq!(rolls(store.list_all()), ["101", "102"]);
    assert_eq!(store.find("101").unwrap().name, "Asha");
}

#[test]
fn save_to_unwritable_location_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("results.csv");

    let mut store = RecordStore::open(CsvFile::new(&path));
    store.add(asha()).unwrap();

    let err = store.save().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert!(store.has_unsaved_changes());
    assert_eq!(store.len(), 1);
}

#[test]
fn config_opens_the_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.csv");
    let config = StoreConfig::new(&path);

    let mut store = config.open_store();
    store.add(asha()).unwrap();
    store.save().unwrap();

    assert!(path.exists());
    assert_eq!(config.open_store().len(), 1);
}
