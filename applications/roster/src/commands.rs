/// Interactive commands read from stdin
use crate::error::AppError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `f <id>` - flip the favorite flag of one character
    ToggleFavorite(u32),
    /// `l` - render the list again
    List,
    /// `h` or `?`
    Help,
    /// `q`
    Quit,
}

pub const HELP: &str = "Commands: f <id> toggle favorite | l list | h help | q quit";

impl FromStr for Command {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(AppError::UnknownCommand(input.trim().to_string()));
        }

        match (name, arg) {
            ("f" | "fav" | "favorite", Some(id)) => id
                .parse()
                .map(Command::ToggleFavorite)
                .map_err(|_| AppError::UnknownCommand(input.trim().to_string())),
            ("l" | "list", None) => Ok(Command::List),
            ("h" | "help" | "?", None) => Ok(Command::Help),
            ("q" | "quit" | "exit", None) => Ok(Command::Quit),
            _ => Err(AppError::UnknownCommand(input.trim().to_string())),
        }
    }
}
