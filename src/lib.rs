// Library root
// -----------
// This crate exposes the pieces of the reading-list CLI. The binary
// (`main.rs`) wires a terminal console into the UI loop.
//
// Module responsibilities:
// - `validate`: pure checks for blank text and bounded integers.
// - `books`: the bounded, duplicate-free list of books to read.
// - `config`: session limits, application metadata and logging setup.
// - `command`: the fixed set of menu commands.
// - `console`: the terminal seam (`Console` trait and its real backend).
// - `ui`: startup prompts, the command menu and the restart loop.
// - `error`: recoverable error kinds shared by the modules above.
pub mod books;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod ui;
pub mod validate;

pub use books::BookList;
pub use command::Command;
pub use config::{AppInfo, Limits};
pub use console::{Console, TerminalConsole};
pub use error::{BookError, Result};
pub use ui::{Flow, Session};
