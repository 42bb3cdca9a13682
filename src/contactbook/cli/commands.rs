//! # Interactive Loop
//!
//! `run()` resolves configuration, opens the address book through
//! [`AssistantApi`], then reads one command per line from stdin until `exit`,
//! `close` or end of input. Leaving always saves the book.
//!
//! Command errors (bad field values, unknown contacts, wrong arguments) are
//! printed and the loop goes on. Only a failed final save ends the process
//! with an error.

use super::parser::{parse, Command, Parsed};
use super::render::{print_error, print_messages, render_result};
use super::setup::{get_grouped_help, Cli};
use super::suggest::suggest;
use clap::Parser;
use contactbook::api::{AssistantApi, CmdResult};
use contactbook::config::AssistantConfig;
use contactbook::error::Result;
use contactbook::store::fs::{FileStore, DEFAULT_DATA_FILE};
use directories::ProjectDirs;
use log::{debug, warn, LevelFilter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type Api = AssistantApi<FileStore>;

enum Flow {
    Continue,
    Exit,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "contactbook", "contactbook")
}

fn load_config(cli: &Cli) -> AssistantConfig {
    let config_dir = cli
        .config_dir
        .clone()
        .or_else(|| project_dirs().map(|dirs| dirs.config_dir().to_path_buf()));

    let Some(dir) = config_dir else {
        debug!("no config directory available, using defaults");
        return AssistantConfig::default();
    };

    match AssistantConfig::load(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring config in {}: {}", dir.display(), e);
            AssistantConfig::default()
        }
    }
}

fn default_data_file() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(DEFAULT_DATA_FILE),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli);
    let data_file = config.resolve_data_file(cli.file.clone(), default_data_file());
    debug!("using address book at {}", data_file.display());

    let mut api = AssistantApi::open(FileStore::new(data_file), config.settings());

    println!("Welcome to the assistant bot!");
    print_messages(api.startup_messages());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("Enter command: ");
        io::stdout().flush()?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("stopped reading input: {}", e);
                println!();
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        match handle_line(&mut api, &line) {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }

    let saved = api.save()?;
    print_messages(&saved.messages);
    println!("Goodbye!");
    Ok(())
}

fn handle_line(api: &mut Api, line: &str) -> Flow {
    let command = match parse(line) {
        Ok(Parsed::Empty) => return Flow::Continue,
        Ok(Parsed::Command(command)) => command,
        Ok(Parsed::Unknown(verb)) => {
            debug!("unknown command '{}'", verb);
            match suggest(&verb) {
                Some(name) => println!("Did you mean '{}'?", name),
                None => println!("Invalid command. Please try again"),
            }
            return Flow::Continue;
        }
        Err(e) => {
            debug!("could not parse '{}': {}", line.trim(), e);
            print_error(&e);
            return Flow::Continue;
        }
    };

    debug!("dispatching {:?}", command);
    match command {
        Command::Exit => return Flow::Exit,
        Command::Hello => println!("How can I help you?"),
        Command::Help => print!("{}", get_grouped_help()),
        other => {
            let heading = match &other {
                Command::All => "All contacts:",
                _ => "Found contacts:",
            };
            match dispatch(api, other) {
                Ok(result) => render_result(&result, heading),
                Err(e) => print_error(&e),
            }
        }
    }
    Flow::Continue
}

fn dispatch(api: &mut Api, command: Command) -> Result<CmdResult> {
    match command {
        Command::Add(contact) => api.add_contact(contact),
        Command::AddPhone { name, phone } => api.add_phone(&name, &phone),
        Command::ChangePhone { name, old, new } => api.change_phone(&name, &old, &new),
        Command::RemovePhone { name, phone } => api.remove_phone(&name, &phone),
        Command::Phone { name } => api.phones(&name),
        Command::AddEmail { name, email } => api.add_email(&name, &email),
        Command::AddAddress { name, address } => api.add_address(&name, &address),
        Command::AddBirthday { name, birthday } => api.add_birthday(&name, &birthday),
        Command::ShowBirthday { name } => api.show_birthday(&name),
        Command::RemoveBirthday { name } => api.remove_birthday(&name),
        Command::Birthdays { days } => api.upcoming_birthdays(days),
        Command::WhenBirthdays => api.when_birthdays(),
        Command::Search { term } => api.search(&term),
        Command::All => api.all(),
        Command::DeleteContact { name } => api.delete_contact(&name),
        Command::AddNote { name, text, tags } => api.add_note(&name, &text, &tags),
        Command::EditNote {
            name,
            selector,
            text,
            tags,
        } => api.edit_note(&name, &selector, &text, tags.as_deref()),
        Command::DeleteNote { name, selector } => api.delete_note(&name, &selector),
        Command::AddTags {
            name,
            selector,
            tags,
        } => api.add_tags(&name, &selector, &tags),
        Command::RemoveTags {
            name,
            selector,
            tags,
        } => api.remove_tags(&name, &selector, &tags),
        Command::FindNotesByTag { tag } => api.find_notes_by_tag(&tag),
        Command::FindContactsByTag { tag } => api.find_contacts_by_tag(&tag),
        Command::SearchNotesByTags { tags } => api.find_notes_by_tags(&tags),
        Command::Hello | Command::Help | Command::Exit => Ok(CmdResult::default()),
    }
}
