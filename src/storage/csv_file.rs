//! CsvFile - flat-file backend with a `roll_no,name,father_name,sgpa,result` header.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::RecordBackend;
use crate::error::StoreError;
use crate::record::{RecordInput, StudentRecord, COLUMNS};

/// Comma-separated file backend.
///
/// Saves go through a sibling temporary file that is renamed over the
/// target, so a failed save leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn error(&self, err: impl Display) -> StoreError {
        StoreError::Io(format!("{}: {}", self.path.display(), err))
    }

    /// Map header names to column positions, so column order in the file does not matter.
    fn column_positions(&self, headers: &csv::StringRecord) -> Result<[usize; 5], StoreError> {
        let mut positions = [0usize; 5];
        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| self.error(format!("missing column {:?} in header", column)))?;
        }
        Ok(positions)
    }

    fn write_to(&self, path: &Path, records: &[StudentRecord]) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(record.to_row())?;
        }
        let file = writer
            .into_inner()
            .map_err(|e| StoreError::Io(e.error().to_string()))?;
        file.sync_all()?;
        Ok(())
    }
}

impl RecordBackend for CsvFile {
    fn load(&self) -> Result<Option<Vec<StudentRecord>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.error(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers().map_err(|e| self.error(e))?.clone();
        if headers.is_empty() {
            return Ok(Some(Vec::new()));
        }
        let positions = self.column_positions(&headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| self.error(e))?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            if row.len() != headers.len() {
                warn!(path = %self.path.display(), line, "skipping row with wrong column count");
                continue;
            }
            let [roll_no, name, father_name, sgpa, result] =
                positions.map(|i| row.get(i).unwrap_or(""));
            match RecordInput::new(roll_no, name, father_name, sgpa, result).into_record() {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(path = %self.path.display(), line, error = %err, "skipping invalid row");
                }
            }
        }

        debug!(path = %self.path.display(), rows = records.len(), "read csv");
        Ok(Some(records))
    }

    fn save(&self, records: &[StudentRecord]) -> Result<(), StoreError> {
        let temp = self.temp_path();
        let result = self
            .write_to(&temp, records)
            .and_then(|_| fs::rename(&temp, &self.path).map_err(StoreError::from));

        if let Err(err) = result {
            let _ = fs::remove_file(&temp);
            return Err(match err {
                StoreError::Io(msg) => self.error(msg),
                other => other,
            });
        }
        debug!(path = %self.path.display(), rows = records.len(), "wrote csv");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(roll_no: &str, sgpa: &str) -> StudentRecord {
        RecordInput::new(roll_no, "Asha", "Ram", sgpa, "Pass")
            .into_record()
            .unwrap()
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvFile::new(dir.path().join("absent.csv"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn writes_header_and_decimal_sgpa() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let backend = CsvFile::new(&path);

        backend
            .save(&[record("101", "9"), record("102", "8.5")])
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "roll_no,name,father_name,sgpa,result\n101,Asha,Ram,9.0,Pass\n102,Asha,Ram,8.5,Pass\n"
        );
        assert!(!backend.temp_path().exists());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvFile::new(dir.path().join("results.csv"));

        backend.save(&[record("101", "8.5"), record("102", "7.0")]).unwrap();
        backend.save(&[record("103", "6.0")]).unwrap();

        let loaded = backend.load().unwrap().unwrap();
        assert_eq!(loaded, vec![record("103", "6.0")]);
    }

    #[test]
    fn quoted_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvFile::new(dir.path().join("results.csv"));
        let tricky = RecordInput::new("9", "Singh, Jr.", "Ram \"RK\" Kumar", "7.5", "Pass")
            .into_record()
            .unwrap();

        backend.save(std::slice::from_ref(&tricky)).unwrap();
        assert_eq!(backend.load().unwrap().unwrap(), vec![tricky]);
    }

    #[test]
    fn reordered_columns_are_read_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(&path, "name,roll_no,result,sgpa,father_name\nAsha,101,Pass,8.5,Ram\n").unwrap();

        let loaded = CsvFile::new(&path).load().unwrap().unwrap();
        assert_eq!(loaded, vec![record("101", "8.5")]);
    }

    #[test]
    fn empty_file_loads_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(&path, "").unwrap();

        assert_eq!(CsvFile::new(&path).load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(
            &path,
            "roll_no,name,father_name,sgpa,result\n\
             101,Asha,Ram,8.5,Pass\n\
             102,Ravi,Mohan,high,Pass\n\
             103,Meena,Suresh,7.0,\n\
             104,Lata,Dev\n\
             105,Asha,Ram,6.0,Pass\n",
        )
        .unwrap();

        let loaded = CsvFile::new(&path).load().unwrap().unwrap();
        assert_eq!(loaded, vec![record("101", "8.5"), record("105", "6.0")]);
    }

    #[test]
    fn missing_column_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(&path, "roll_no,name,sgpa,result\n101,Asha,8.5,Pass\n").unwrap();

        let err = CsvFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Io(msg) if msg.contains("father_name")));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvFile::new(dir.path().join("no-such-dir").join("results.csv"));
        let err = backend.save(&[record("101", "8.5")]).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
