use std::error::Error;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use cli::{Command, CommandLine};
use student_results::form::{self, FormSession};
use student_results::menu::Menu;
use student_results::{render, RecordStore, StoreConfig, StoreError};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = CommandLine::parse();
    let config = StoreConfig::resolve(args.file);

    match run(&config, args.command.unwrap_or(Command::Menu)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &StoreConfig, command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Menu => {
            let mut store = config.open_store();
            Menu::new(&mut store, io::stdin().lock(), io::stdout()).run()?;
        }
        Command::Form => {
            let mut store = config.open_store();
            let mut session = FormSession::new(&mut store);
            form::console::run(&mut session, io::stdin().lock(), io::stdout())?;
        }
        Command::List { json } => {
            // Read-only commands report a broken file instead of showing an empty table.
            let store = RecordStore::load(config.backend())?;
            if json {
                println!("{}", serde_json::to_string_pretty(store.list_all())?);
            } else if store.is_empty() {
                println!("No records to display.");
            } else {
                print!("{}", render::table(store.list_all()));
            }
        }
        Command::Find { roll_no, json } => {
            let store = RecordStore::load(config.backend())?;
            let roll_no = roll_no.trim();
            let record = store
                .find(roll_no)
                .ok_or_else(|| StoreError::NotFound(roll_no.to_string()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                print!("{}", render::record(record));
            }
        }
    }
    Ok(())
}
