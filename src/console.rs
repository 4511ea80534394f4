// Terminal seam for the command loop. The loop only talks to `Console`,
// so tests can drive it with scripted input instead of a real terminal.

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Line-oriented terminal used by the menu.
///
/// `read_line` blocks until a full line is available. When input is
/// closed it fails with an `io::Error` of kind `UnexpectedEof`.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn print(&mut self, text: &str);

    fn print_error(&mut self, text: &str);

    fn clear(&mut self) -> Result<()>;

    /// Wait for the user to acknowledge with Enter.
    fn pause(&mut self, prompt: &str) -> Result<()> {
        self.read_line(prompt).map(|_| ())
    }
}

/// Console backed by the process's stdin/stdout.
///
/// On an interactive terminal prompts go through `dialoguer`; when stdin
/// is piped, lines are read directly so end of input can be detected.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_piped_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}: ", prompt);
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        // piped input is not echoed by a terminal
        println!();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !self.interactive {
            return self.read_piped_line(prompt);
        }
        // `allow_empty` so blank lines reach validation instead of re-prompting.
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read from terminal")?;
        Ok(line)
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn print_error(&mut self, text: &str) {
        println!("{}", text.red());
    }

    fn clear(&mut self) -> Result<()> {
        if !io::stdout().is_terminal() {
            return Ok(());
        }
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear terminal")?;
        Ok(())
    }
}
