use std::str::FromStr;

/// The lines of the main menu, in display order.
pub const MENU: [&str; 4] = [
    "1. Load Data Structure.",
    "2. Print Course List.",
    "3. Print Course.",
    "9. Exit",
];

pub const PROMPT: &str = "What would you like to do? ";

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Load a catalog file.
    Load,
    /// List every course in number order.
    List,
    /// Show one course and its prerequisites.
    Show,
    /// Leave the planner.
    Exit,
}

/// A menu answer that is not one of the offered options.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0} is not a valid option.")]
pub struct InvalidChoice(String);

impl FromStr for Choice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(1) => Ok(Self::Load),
            Ok(2) => Ok(Self::List),
            Ok(3) => Ok(Self::Show),
            Ok(9) => Ok(Self::Exit),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}
