//! Main menu options.

use crate::locale::Locale;
use std::fmt;
use std::str::FromStr;

/// One entry of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Exit,
    AddTask,
    CompleteNext,
    RemoveFirst,
    ShowFirst,
    ShowNext,
    ListAll,
    ListPending,
    ListCompleted,
    Reverse,
    Clear,
}

impl MenuChoice {
    /// All options in menu order.
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::Exit,
        MenuChoice::AddTask,
        MenuChoice::CompleteNext,
        MenuChoice::RemoveFirst,
        MenuChoice::ShowFirst,
        MenuChoice::ShowNext,
        MenuChoice::ListAll,
        MenuChoice::ListPending,
        MenuChoice::ListCompleted,
        MenuChoice::Reverse,
        MenuChoice::Clear,
    ];

    /// Number typed to select this option.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddTask => 1,
            MenuChoice::CompleteNext => 2,
            MenuChoice::RemoveFirst => 3,
            MenuChoice::ShowFirst => 4,
            MenuChoice::ShowNext => 5,
            MenuChoice::ListAll => 6,
            MenuChoice::ListPending => 7,
            MenuChoice::ListCompleted => 8,
            MenuChoice::Reverse => 9,
            MenuChoice::Clear => 10,
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        locale.messages().menu_options[self.number()]
    }
}

/// Error returned for input that is not a menu number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMenuChoiceError {
    input: String,
}

impl fmt::Display for ParseMenuChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown menu option: '{}'", self.input)
    }
}

impl std::error::Error for ParseMenuChoiceError {}

impl FromStr for MenuChoice {
    type Err = ParseMenuChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| Self::ALL.get(n).copied())
            .ok_or_else(|| ParseMenuChoiceError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_number() {
        for choice in MenuChoice::ALL {
            let parsed: MenuChoice = choice.number().to_string().parse().unwrap();
            assert_eq!(parsed, choice);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 10 ".parse::<MenuChoice>().unwrap(), MenuChoice::Clear);
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_text() {
        assert!("11".parse::<MenuChoice>().is_err());
        assert!("-1".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(MenuChoice::Reverse.label(Locale::English), "Reverse list order");
        assert_eq!(MenuChoice::Exit.label(Locale::Portuguese), "Sair");
    }
}
