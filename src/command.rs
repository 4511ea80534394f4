// Menu commands. Matching is exact and case-sensitive: "/Start" or
// " /start" are not commands.

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Commands accepted at the menu prompt, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
pub enum Command {
    #[strum(serialize = "/start")]
    Start,
    #[strum(serialize = "/help")]
    Help,
    #[strum(serialize = "/info")]
    Info,
    #[strum(serialize = "/echo")]
    Echo,
    #[strum(serialize = "/addtask")]
    AddTask,
    #[strum(serialize = "/showtasks")]
    ShowTasks,
    #[strum(serialize = "/removetask")]
    RemoveTask,
    #[strum(serialize = "/exit")]
    Exit,
}

impl Command {
    /// Parse a menu line. Returns `None` for anything that is not exactly a
    /// command token.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    pub fn token(self) -> &'static str {
        self.into()
    }

    /// One-line description used by `/help`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Start => "Register with the application by entering your name.",
            Command::Help => "Show this help on using the application.",
            Command::Info => "Show the program version and its creation date.",
            Command::Echo => {
                "Print back the argument you enter (for example, Hello). \
                 Available only after you have entered your name."
            }
            Command::AddTask => "Add a new book to the list.",
            Command::ShowTasks => "Show every book on the list.",
            Command::RemoveTask => "Remove a book by its number on the list.",
            Command::Exit => "Quit the application.",
        }
    }

    /// Commands shown in the menu. `/echo` only appears once a name is set.
    pub fn menu(registered: bool) -> impl Iterator<Item = Command> {
        Command::iter().filter(move |cmd| registered || *cmd != Command::Echo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_token() {
        for cmd in Command::iter() {
            assert_eq!(Command::parse(cmd.token()), Some(cmd));
        }
        assert_eq!(Command::parse("/addtask"), Some(Command::AddTask));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Command::parse("/Start"), None);
        assert_eq!(Command::parse(" /start"), None);
        assert_eq!(Command::parse("/start "), None);
        assert_eq!(Command::parse("start"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("/unknown"), None);
    }

    #[test]
    fn test_menu_hides_echo_until_registered() {
        assert!(!Command::menu(false).any(|c| c == Command::Echo));
        assert!(Command::menu(true).any(|c| c == Command::Echo));
        assert_eq!(Command::menu(true).count(), 8);
        assert_eq!(Command::menu(false).count(), 7);
    }
}
