// UI layer: startup prompts, the command menu and the outer restart loop.
// All terminal traffic goes through `Console`; all state lives in an
// explicit `Session` created once the limits have been entered.

use crate::books::BookList;
use crate::command::Command;
use crate::config::{AppInfo, Limits};
use crate::console::Console;
use crate::error::{self, BookError};
use crate::validate::{parse_bounded_int, validate_non_blank};
use anyhow::Result;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::io;

const COUNT_PROMPT: &str = "Enter the maximum number of books, from 1 to 100";
const LENGTH_PROMPT: &str = "Enter the maximum length of a book entry, from 1 to 100";
const RETURN_PROMPT: &str = "Press Enter to return to the menu";

/// State of one session: the registered name and the book list.
pub struct Session {
    name: Option<String>,
    books: BookList,
}

impl Session {
    pub fn new(limits: Limits) -> Self {
        Self {
            name: None,
            books: BookList::new(limits),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.name.is_some()
    }

    /// Set the user's name. The first non-blank name wins; later calls
    /// return the name already registered.
    pub fn register(&mut self, name: &str) -> error::Result<&str> {
        validate_non_blank(name)?;
        Ok(self.name.get_or_insert_with(|| name.to_string()).as_str())
    }

    pub fn books(&self) -> &BookList {
        &self.books
    }

    pub fn books_mut(&mut self) -> &mut BookList {
        &mut self.books
    }
}

/// What the menu does after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Top-level loop. Runs sessions until `/exit`.
///
/// Unanticipated failures are reported in full and the whole session,
/// including the startup prompts, starts over. End of input ends the
/// program.
pub fn run<C: Console>(console: &mut C) -> Result<()> {
    loop {
        let err = match run_session(console) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        if is_end_of_input(&err) {
            tracing::info!("Input closed, shutting down");
            return Ok(());
        }

        report_failure(console, &err);
        match console.pause("Press Enter to continue") {
            Ok(()) => {}
            Err(e) if is_end_of_input(&e) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt for limits, then run the menu until `/exit`.
pub fn run_session<C: Console>(console: &mut C) -> Result<()> {
    let limits = prompt_limits(console)?;
    tracing::debug!(
        max_count = limits.max_count(),
        max_length = limits.max_length(),
        "Session started"
    );
    let mut session = Session::new(limits);
    main_menu(console, &mut session)
}

/// Ask for both limits, starting over from the first prompt after any
/// invalid answer.
pub fn prompt_limits<C: Console>(console: &mut C) -> Result<Limits> {
    loop {
        match read_limits(console)? {
            Ok(limits) => return Ok(limits),
            Err(err) => {
                tracing::warn!(error = %err, "Rejected session limits");
                console.print_error(&err.to_string());
            }
        }
    }
}

fn read_limits<C: Console>(console: &mut C) -> Result<error::Result<Limits>> {
    let max_count = match Limits::parse_bound(&console.read_line(COUNT_PROMPT)?) {
        Ok(value) => value,
        Err(err) => return Ok(Err(err)),
    };
    let max_length = match Limits::parse_bound(&console.read_line(LENGTH_PROMPT)?) {
        Ok(value) => value,
        Err(err) => return Ok(Err(err)),
    };
    Ok(Limits::new(max_count, max_length))
}

/// Command menu. Recoverable errors are shown and the loop goes on; any
/// other error is returned to the caller.
pub fn main_menu<C: Console>(console: &mut C, session: &mut Session) -> Result<()> {
    loop {
        console.clear()?;
        console.print(&menu_text(session));

        let input = console.read_line("Command")?;
        let Some(command) = Command::parse(&input) else {
            tracing::debug!(input = %input, "Unrecognized command");
            console.print_error("Unrecognized command.");
            console.pause(RETURN_PROMPT)?;
            continue;
        };

        tracing::debug!(command = command.token(), "Dispatching command");
        match dispatch(console, session, command) {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(err) => match err.downcast::<BookError>() {
                Ok(book_err) => {
                    tracing::warn!(command = command.token(), error = %book_err, "Command failed");
                    console.print_error(&book_err.to_string());
                }
                Err(other) => return Err(other),
            },
        }
        console.pause(RETURN_PROMPT)?;
    }
}

fn menu_text(session: &Session) -> String {
    let mut text = match session.name() {
        Some(name) => format!("Hello, {}! How can I help?", name),
        None => "Hello, user! Available commands:".to_string(),
    };
    for command in Command::menu(session.is_registered()) {
        text.push('\n');
        text.push_str(command.token());
    }
    text
}

fn dispatch<C: Console>(console: &mut C, session: &mut Session, command: Command) -> Result<Flow> {
    match command {
        Command::Start => handle_start(console, session)?,
        Command::Help => console.print(&help_text()),
        Command::Info => console.print(&format!(
            "Program version {}. Created on {}.",
            AppInfo::VERSION,
            AppInfo::CREATED
        )),
        Command::Echo => handle_echo(console, session)?,
        Command::AddTask => handle_add(console, session.books_mut())?,
        Command::ShowTasks => show_books(console, session.books()),
        Command::RemoveTask => handle_remove(console, session.books_mut())?,
        Command::Exit => {
            console.print("Shutting down. Goodbye!");
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn handle_start<C: Console>(console: &mut C, session: &mut Session) -> Result<()> {
    if let Some(name) = session.name() {
        console.print(&format!("You are already registered as {}.", name));
        return Ok(());
    }
    let input = console.read_line("Please enter your name")?;
    let name = session.register(&input)?;
    tracing::debug!(name, "Registered user");
    let message = format!("Name {} has been set.", name);
    console.print(&message);
    Ok(())
}

fn help_text() -> String {
    let mut text = String::from("How to use the program:");
    for command in Command::menu(true) {
        text.push_str(&format!("\n {} - {}", command.token(), command.description()));
    }
    text
}

fn handle_echo<C: Console>(console: &mut C, session: &Session) -> Result<()> {
    if !session.is_registered() {
        console.print("Enter your name with /start to enable this command.");
        return Ok(());
    }
    let argument = console.read_line("Enter an argument")?;
    console.print(&argument);
    Ok(())
}

fn handle_add<C: Console>(console: &mut C, books: &mut BookList) -> Result<()> {
    books.ensure_capacity()?;
    let entry = console.read_line(
        "Enter, separated by commas: book title, author's first and last name, number of pages",
    )?;
    let stored = books.add(&entry)?;
    let message = format!("Book '{}' added to the list.", stored);
    console.print(&message);
    Ok(())
}

fn show_books<C: Console>(console: &mut C, books: &BookList) {
    if books.is_empty() {
        console.print("You have not added any books yet.");
        return;
    }
    let mut text = String::from("\nBooks I want to read:");
    for (index, entry) in books.list() {
        text.push_str(&format!("\n{}. {}", index, entry));
    }
    console.print(&text);
}

fn handle_remove<C: Console>(console: &mut C, books: &mut BookList) -> Result<()> {
    show_books(console, books);
    if books.is_empty() {
        return Ok(());
    }

    let input = console.read_line("Enter the number of the book to remove")?;
    // Parse and range failures read the same to the user.
    match parse_index(&input).and_then(|index| books.delete_by_index(index)) {
        Ok(removed) => console.print(&format!("Book '{}' removed from the list.", removed)),
        Err(err) => {
            tracing::debug!(input = %input, error = %err, "Nothing to remove");
            console.print_error("There is no book with that number on the list.");
        }
    }
    Ok(())
}

/// Parse a 1-based list position. Negative numbers map to 0, which the
/// list rejects as out of range.
fn parse_index(input: &str) -> error::Result<usize> {
    let value = parse_bounded_int(input, i64::MIN, i64::MAX)?;
    Ok(usize::try_from(value).unwrap_or(0))
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<io::Error>(),
            Some(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof
        )
    })
}

fn failure_category(err: &anyhow::Error) -> String {
    match err.chain().find_map(|cause| cause.downcast_ref::<io::Error>()) {
        Some(io_err) => format!("I/O error ({:?})", io_err.kind()),
        None => "Unexpected error".to_string(),
    }
}

fn report_failure<C: Console>(console: &mut C, err: &anyhow::Error) {
    tracing::error!(error = ?err, "Unexpected failure, restarting session");

    let mut report = format!(
        "An unexpected error occurred:\nType: {}\nMessage: {}",
        failure_category(err),
        err
    );
    for cause in err.chain().skip(1) {
        report.push_str(&format!("\nCaused by: {}", cause));
    }
    // Without RUST_BACKTRACE anyhow captures nothing; trace the report site instead.
    match err.backtrace().status() {
        BacktraceStatus::Captured => {
            report.push_str(&format!("\nBacktrace:\n{}", err.backtrace()))
        }
        _ => report.push_str(&format!("\nBacktrace:\n{}", Backtrace::force_capture())),
    }
    console.print_error(&report);
}
