use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage student result records stored in a CSV file.
#[derive(Debug, Parser)]
#[command(name = "student-results", version)]
pub struct CommandLine {
    /// Backing CSV file (default: $STUDENT_RESULTS_FILE or student_results_sem2_extracted.csv)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive numbered menu (default)
    Menu,
    /// Form-style session driven by line commands
    Form,
    /// Print every record
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the record with this roll number
    Find {
        roll_no: String,
        #[arg(long)]
        json: bool,
    },
}
