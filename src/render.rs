//! Plain-text rendering of records shared by the front-ends.

use crate::record::{Field, StudentRecord, COLUMNS};

/// Render records as an aligned table with a header row.
pub fn table(records: &[StudentRecord]) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(StudentRecord::to_row).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS[..], &widths);
    for row in &rows {
        push_line(&mut out, &row[..], &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Render one record as `Label: value` lines.
pub fn record(record: &StudentRecord) -> String {
    Field::ALL
        .iter()
        .map(|field| format!("{:<12}{}\n", format!("{}:", field.label()), record.get(*field)))
        .collect()
}
