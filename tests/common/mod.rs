// Scripted console shared by the integration tests.

use anyhow::Result;
use booklist_cli::Console;
use std::collections::VecDeque;
use std::io;

/// One scripted answer to a prompt.
pub enum Step {
    Line(String),
    Fail(io::ErrorKind),
}

/// Console that answers prompts from a script and records everything
/// printed. Running out of script reports end of input.
#[derive(Default)]
pub struct ScriptedConsole {
    steps: VecDeque<Step>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
    pub errors: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_steps(lines.into_iter().map(|line| Step::Line(line.into())))
    }

    pub fn with_steps<I: IntoIterator<Item = Step>>(steps: I) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn printed(&self, text: &str) -> bool {
        self.output.iter().any(|line| line.contains(text))
    }

    pub fn reported(&self, text: &str) -> bool {
        self.errors.iter().any(|line| line.contains(text))
    }

    pub fn prompt_count(&self, prefix: &str) -> usize {
        self.prompts.iter().filter(|p| p.starts_with(prefix)).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.steps.pop_front() {
            Some(Step::Line(line)) => Ok(line),
            Some(Step::Fail(kind)) => Err(io::Error::new(kind, "scripted failure").into()),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script finished").into()),
        }
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn print_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}
