//! Line-command driver for a [`FormSession`].
//!
//! Each line is one form action (`select 101`, `set sgpa 9.0`, `update`, ...).
//! After every action the notice and the table are printed, with the
//! selected row marked by `>`.

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::FormSession;
use crate::record::Field;
use crate::render;
use crate::storage::RecordBackend;

const HELP: &str = "Commands:
  show                  show all rows and clear the selection
  search <roll_no>      find and select a row
  select <roll_no>      select a row and load it into the entries
  set <field> <value>   fill an entry (roll_no, name, father_name, sgpa, result)
  clear                 clear the entries
  add                   add a record from the entries
  update                update the selected record from the non-blank entries
  delete                delete the selected record
  save                  save to the backing file
  help                  show this text
  quit                  leave the form
";

/// Read commands from `input` until `quit` or end of input.
pub fn run<B, R, W>(form: &mut FormSession<'_, B>, mut input: R, mut output: W) -> io::Result<()>
where
    B: RecordBackend,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", HELP)?;
    print_view(form, &mut output)?;

    loop {
        write!(output, "form> ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "" => continue,
            "show" => form.show_all(),
            "search" => {
                let notice = form.search(rest);
                writeln!(output, "{}", notice)?;
            }
            "select" => {
                if !form.select(rest) {
                    writeln!(output, "No record found for roll {}.", rest)?;
                }
            }
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match name.parse::<Field>() {
                    Ok(field) => form.set_entry(field, value.trim()),
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            "clear" => form.clear_entries(),
            "add" => {
                let notice = form.add();
                writeln!(output, "{}", notice)?;
            }
            "update" => {
                let notice = form.update();
                writeln!(output, "{}", notice)?;
            }
            "delete" => {
                let approved = match form.selected_roll().map(str::to_string) {
                    Some(roll_no) => {
                        write!(output, "Delete record for roll {}? [y/N] ", roll_no)?;
                        output.flush()?;
                        let answer = read_line(&mut input)?.unwrap_or_default();
                        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
                    }
                    None => false,
                };
                let notice = form.delete(|_| approved);
                writeln!(output, "{}", notice)?;
            }
            "save" => {
                let notice = form.save();
                writeln!(output, "{}", notice)?;
            }
            "help" => {
                write!(output, "{}", HELP)?;
                continue;
            }
            "quit" | "exit" => break,
            other => {
                writeln!(output, "Unknown command: {} (try help)", other)?;
                continue;
            }
        }

        print_view(form, &mut output)?;
    }

    if form.has_unsaved_changes() {
        warn!("form closed with unsaved changes; they were not written");
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Print the table with the selected row marked, then the entry fields.
fn print_view<B: RecordBackend, W: Write>(
    form: &FormSession<'_, B>,
    output: &mut W,
) -> io::Result<()> {
    let table = render::table(form.rows());
    let selected = form
        .selected_roll()
        .and_then(|roll| form.rows().iter().position(|r| r.roll_no == roll));

    for (i, line) in table.lines().enumerate() {
        // Line 0 is the header.
        let marker = if i > 0 && Some(i - 1) == selected {
            ">"
        } else {
            " "
        };
        writeln!(output, "{} {}", marker, line)?;
    }

    let entries: Vec<String> = Field::ALL
        .iter()
        .map(|field| format!("{}=[{}]", field.column(), form.entries().get(*field)))
        .collect();
    writeln!(output, "  entries: {}", entries.join(" "))
}
