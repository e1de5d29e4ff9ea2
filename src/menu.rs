//! Text-menu front-end.
//!
//! The menu reads choices and field values line by line from any `BufRead`
//! and writes prompts and results to any `Write`, so a whole session can
//! be scripted in tests. Store errors are reported and the loop continues.
//!
//! ## Example
//!
//! ```ignore
//! use std::io;
//! use student_results::{menu::Menu, CsvFile, RecordStore};
//!
//! let mut store = RecordStore::open(CsvFile::new("results.csv"));
//! Menu::new(&mut store, io::stdin().lock(), io::stdout()).run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::normalize;
use crate::record::{Field, RecordInput};
use crate::render;
use crate::storage::RecordBackend;
use crate::store::RecordStore;

const MENU: &str = "\n------- Student Result Management -------
1. Show all students
2. Search by roll number
3. Add new student
4. Update student
5. Delete student
6. Save & exit
";

/// How a menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user chose "Save & exit" and the save succeeded.
    Saved,
    /// Input ran out; nothing was saved by the menu.
    EndOfInput,
}

enum Step {
    Continue,
    Eof,
}

/// Interactive text menu over a record store.
pub struct Menu<'a, B, R, W> {
    store: &'a mut RecordStore<B>,
    input: R,
    output: W,
}

impl<'a, B: RecordBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(store: &'a mut RecordStore<B>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until "Save & exit" succeeds or input ends.
    pub fn run(mut self) -> io::Result<MenuExit> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                return Ok(self.end_of_input());
            };

            let step = match choice.trim() {
                "1" => self.show_all()?,
                "2" => self.search()?,
                "3" => self.add()?,
                "4" => self.update()?,
                "5" => self.delete()?,
                "6" => match self.store.save() {
                    Ok(()) => {
                        writeln!(
                            self.output,
                            "Data saved to {}",
                            self.store.backend().location()
                        )?;
                        writeln!(self.output, "Goodbye!")?;
                        return Ok(MenuExit::Saved);
                    }
                    Err(err) => {
                        writeln!(self.output, "Save failed: {}", err)?;
                        Step::Continue
                    }
                },
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Step::Continue
                }
            };

            if let Step::Eof = step {
                return Ok(self.end_of_input());
            }
        }
    }

    fn end_of_input(&mut self) -> MenuExit {
        if self.store.has_unsaved_changes() {
            warn!("input ended with unsaved changes; they were not written");
        }
        MenuExit::EndOfInput
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_all(&mut self) -> io::Result<Step> {
        if self.store.is_empty() {
            writeln!(self.output, "No records to display.")?;
        } else {
            write!(self.output, "{}", render::table(self.store.list_all()))?;
        }
        Ok(Step::Continue)
    }

    fn search(&mut self) -> io::Result<Step> {
        let Some(raw) = self.prompt("Enter roll number to search: ")? else {
            return Ok(Step::Eof);
        };
        let roll_no = normalize::field_value(Field::RollNo, &raw);

        match self.store.find(&roll_no) {
            Some(record) => write!(self.output, "{}", render::table(std::slice::from_ref(record)))?,
            None => writeln!(self.output, "Record not found.")?,
        }
        Ok(Step::Continue)
    }

    fn add(&mut self) -> io::Result<Step> {
        let Some(raw_roll) = self.prompt("Roll No: ")? else {
            return Ok(Step::Eof);
        };
        let roll_no = normalize::field_value(Field::RollNo, &raw_roll);
        if self.store.contains(&roll_no) {
            writeln!(self.output, "Roll already exists.")?;
            return Ok(Step::Continue);
        }

        let mut values: [String; 4] = Default::default();
        for (slot, text) in values.iter_mut().zip([
            "Name: ",
            "Father Name: ",
            "SGPA (0-10): ",
            "Result (Pass/Re-Appear): ",
        ]) {
            let Some(value) = self.prompt(text)? else {
                return Ok(Step::Eof);
            };
            *slot = value;
        }
        let [name, father_name, sgpa, result] = values;

        let input = normalize::input(RecordInput {
            roll_no,
            name,
            father_name,
            sgpa,
            result,
        });
        match self.store.add(input) {
            Ok(_) => writeln!(self.output, "Student added.")?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(Step::Continue)
    }

    fn update(&mut self) -> io::Result<Step> {
        let Some(raw) = self.prompt("Enter roll number to update: ")? else {
            return Ok(Step::Eof);
        };
        let roll_no = normalize::field_value(Field::RollNo, &raw);

        let Some(current) = self.store.find(&roll_no) else {
            writeln!(self.output, "Record not found.")?;
            return Ok(Step::Continue);
        };
        let current = render::record(current);
        write!(self.output, "Current record:\n{}", current)?;

        let mut raw_changes = Vec::new();
        for field in [Field::Name, Field::FatherName, Field::Sgpa, Field::Result] {
            let text = format!("New {} (leave blank to skip): ", field.label());
            let Some(value) = self.prompt(&text)? else {
                return Ok(Step::Eof);
            };
            raw_changes.push((field, value));
        }

        let changes = normalize::changes(raw_changes.iter().map(|(f, v)| (*f, v.as_str())));
        if changes.is_empty() {
            writeln!(self.output, "Nothing to update.")?;
            return Ok(Step::Continue);
        }
        match self.store.update(&roll_no, changes) {
            Ok(_) => writeln!(self.output, "Record updated.")?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(Step::Continue)
    }

    fn delete(&mut self) -> io::Result<Step> {
        let Some(raw) = self.prompt("Enter roll number to delete: ")? else {
            return Ok(Step::Eof);
        };
        let roll_no = normalize::field_value(Field::RollNo, &raw);

        match self.store.delete(&roll_no) {
            Ok(_) => writeln!(self.output, "Deleted.")?,
            Err(_) => writeln!(self.output, "Record not found.")?,
        }
        Ok(Step::Continue)
    }
}
